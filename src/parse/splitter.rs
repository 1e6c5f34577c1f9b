use crate::core::types::FIELD_COUNT;

/// Comma splitter for catalog rows with quoted segments.
pub struct LineSplitter;

impl LineSplitter {
    /// Split one source row into exactly `FIELD_COUNT` raw fields.
    ///
    /// A double quote toggles quoting and is never copied into a field; a
    /// comma inside quotes belongs to the current field. There is no escape
    /// sequence, so an unterminated quote runs to the end of the line. Rows
    /// short of `FIELD_COUNT` are padded with empty fields, surplus fields
    /// are dropped.
    pub fn split(line: &str) -> [String; FIELD_COUNT] {
        let mut fields: [String; FIELD_COUNT] = Default::default();
        let mut index = 0;
        let mut in_quotes = false;
        let mut current = String::new();

        for c in line.chars() {
            if c == '"' {
                in_quotes = !in_quotes;
            } else if c == ',' && !in_quotes {
                if index < FIELD_COUNT {
                    fields[index] = current;
                    index += 1;
                }
                current = String::new();
            } else {
                current.push(c);
            }
        }

        // The final field is closed by the end of the line, not a comma
        if index < FIELD_COUNT {
            fields[index] = current;
        }

        fields
    }
}
