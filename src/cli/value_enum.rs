use clap::ValueEnum;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    Md,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Tsv => OutputFormat::Tsv,
            CliOutputFormat::Json => OutputFormat::Json,
            #[cfg(feature = "yaml")]
            CliOutputFormat::Yaml => OutputFormat::Yaml,
            CliOutputFormat::Md => OutputFormat::Md,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

impl From<OutputFormat> for CliOutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Table => CliOutputFormat::Table,
            OutputFormat::Csv => CliOutputFormat::Csv,
            OutputFormat::Tsv => CliOutputFormat::Tsv,
            OutputFormat::Json => CliOutputFormat::Json,
            #[cfg(feature = "yaml")]
            OutputFormat::Yaml => CliOutputFormat::Yaml,
            OutputFormat::Md => CliOutputFormat::Md,
            OutputFormat::Jsonl => CliOutputFormat::Jsonl,
        }
    }
}
