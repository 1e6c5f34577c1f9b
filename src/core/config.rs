use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub report_path: PathBuf,
    pub report_label: String,
    pub row_hint: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_path: PathBuf::from("./disneyplus.csv"),
            report_path: PathBuf::from("./marquee_sequential.txt"),
            report_label: "marquee".to_string(),
            row_hint: 1368,                 // Catalog size of the reference dataset
        }
    }
}
