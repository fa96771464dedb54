// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use country_table_domain::{ContinentFilter, HasStatesFilter, PageSize, SortSpec};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "country_table",
    version = crate::VERSION,
    about = "国一覧テーブル (大陸/州の有無で絞り込み・ソート・ページ送り)",
    group(
        clap::ArgGroup::new("mode")
            .args(["interactive", "list_continents"])
            .multiple(false)
    )
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 大陸で絞り込み (コード AF/NA/OC/AN/AS/EU/SA、名前、または all)
    #[arg(long, default_value = "all", help_heading = "フィルタ")]
    pub continent: ContinentFilter,

    /// 州の有無で絞り込み (true/yes, false/no, all)
    #[arg(long, default_value = "all", help_heading = "フィルタ")]
    pub has_states: HasStatesFilter,

    /// ソート列と方向 (例: name, continent:desc, has-states:asc)
    #[arg(long, help_heading = "出力")]
    pub sort: Option<SortSpec>,

    /// 表示するページ (1 始まり)
    #[arg(long, default_value_t = 1, help_heading = "ページ")]
    pub page: usize,

    /// 1 ページあたりの行数 (5, 10, 25 または all)
    #[arg(long, conflicts_with = "all_rows", help_heading = "ページ")]
    pub rows_per_page: Option<PageSize>,

    /// ページ分割せず全行を表示 (--rows-per-page all と同じ)
    #[arg(long, help_heading = "ページ")]
    pub all_rows: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 出力先ファイル (省略時は標準出力)
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, conflicts_with = "interactive", help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// テーブルを ASCII 罫線で描画
    #[arg(long, help_heading = "出力")]
    pub ascii: bool,

    /// 同梱データの代わりに読み込むデータファイル (JSON/YAML)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "データ")]
    pub data: Option<PathBuf>,

    /// 標準入力からコマンドを読む対話モード
    #[arg(long, short = 'i', help_heading = "モード")]
    pub interactive: bool,

    /// 大陸の一覧と件数を表示して終了
    #[arg(long, help_heading = "モード")]
    pub list_continents: bool,

    /// ログ詳細度 (-v: info, -vv: debug)。COUNTRY_TABLE_LOG が優先
    #[arg(long, short = 'v', action = ArgAction::Count, help_heading = "その他")]
    pub verbose: u8,
}
