use std::io::BufRead;
use tracing::{error, warn};

/// Token ending an input query block.
pub const TERMINATOR: &str = "FIM";

/// Verdict printed when a queried title exists in the working subset.
pub const VERDICT_FOUND: &str = "SIM";

/// Verdict printed when it does not.
pub const VERDICT_MISSING: &str = "NAO";

/// Line-oriented query input: one id block, then one title block, each
/// closed by the terminator token.
///
/// End of input before a terminator closes the current block with a warning
/// instead of failing; an unreadable stream does the same.
pub struct QueryStream<R> {
    pub reader: R,
}

impl<R: BufRead> QueryStream<R> {
    pub fn new(reader: R) -> Self {
        QueryStream { reader }
    }

    /// Whitespace-separated id tokens up to the terminator.
    pub fn id_block(&mut self) -> Vec<String> {
        let mut ids = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    warn!("query input ended before the block terminator");
                    return ids;
                }
                Ok(_) => {}
                Err(err) => {
                    error!(error = %err, "query input unreadable, closing the block");
                    return ids;
                }
            }
            for token in line.split_whitespace() {
                if token == TERMINATOR {
                    return ids;
                }
                ids.push(token.to_string());
            }
        }
    }

    /// Next whole-line title, or `None` at the terminator or end of input.
    ///
    /// Titles keep their spacing exactly; only the line break is removed.
    pub fn next_title(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                warn!("query input ended before the block terminator");
                None
            }
            Ok(_) => {
                let title = line.trim_end_matches(['\r', '\n']);
                if title == TERMINATOR {
                    None
                } else {
                    Some(title.to_string())
                }
            }
            Err(err) => {
                error!(error = %err, "query input unreadable, closing the block");
                None
            }
        }
    }

    /// Remaining titles through the terminator.
    pub fn title_block(&mut self) -> Vec<String> {
        let mut titles = Vec::new();
        while let Some(title) = self.next_title() {
            titles.push(title);
        }
        titles
    }
}
