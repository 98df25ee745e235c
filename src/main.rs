use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use reliefboard::chart::{init_charts, ChartElement};
use reliefboard::config::DashboardConfig;
use reliefboard::state::TableView;
use reliefboard::table::export::{write_visible, ExportFormat};
use reliefboard::table::{loader, FilterSpec};

#[derive(Parser)]
#[command(name = "reliefboard")]
#[command(about = "Table and chart tools for the relief dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, search and sort a table snapshot, then export the visible rows.
    Table {
        /// Table file (.csv, .tsv or .json).
        #[arg(long)]
        input: PathBuf,

        /// Column to filter on (0-based).
        #[arg(long, requires = "query")]
        filter_column: Option<usize>,

        /// Text the filter column must contain.
        #[arg(long, requires = "filter_column")]
        query: Option<String>,

        /// Text any cell must contain.
        #[arg(long)]
        search: Option<String>,

        /// Column to sort by (0-based).
        #[arg(long)]
        sort_column: Option<usize>,

        /// Sort descending; the same as clicking the header twice.
        #[arg(long, requires = "sort_column")]
        descending: bool,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file; stdout when omitted.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },

    /// Build the renderer configuration for one chart element.
    Chart {
        /// Element id, e.g. evacueeStatusChart.
        #[arg(long)]
        element: String,

        /// Attribute JSON, or @path to read it from a file.
        #[arg(long)]
        data: String,

        /// Chart presets JSON; the built-in dashboard presets when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Table {
            input,
            filter_column,
            query,
            search,
            sort_column,
            descending,
            format,
            out,
        } => {
            let table = loader::load_file(&input)
                .with_context(|| format!("loading table {}", input.display()))?;
            let mut view = TableView::new(table);

            if let (Some(column), Some(query)) = (filter_column, query) {
                view.set_filter(FilterSpec::new(column, query))?;
            }
            if let Some(search) = search {
                view.set_search(search)?;
            }
            if let Some(column) = sort_column {
                view.click_header(column)?;
                if descending {
                    view.click_header(column)?;
                }
            }

            match out {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    write_visible(&view.table, &view.mask, &view.order, format, file)?;
                    log::info!("wrote {} rows to {}", view.visible_rows().len(), path.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    write_visible(&view.table, &view.mask, &view.order, format, stdout.lock())?;
                }
            }
        }
        Commands::Chart {
            element,
            data,
            config,
        } => {
            let config = match config {
                Some(path) => DashboardConfig::from_json_file(&path)?,
                None => DashboardConfig::default(),
            };
            let Some(preset) = config.preset(&element) else {
                bail!("no chart preset for element '{element}'");
            };
            let attribute = preset.data_attribute.clone();

            let raw = match data.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("reading chart data {path}"))?,
                None => data,
            };

            let element = ChartElement::new(element).with_attribute(attribute, raw);
            let charts = init_charts(&config, &[element])?;
            let mut stdout = std::io::stdout().lock();
            for (_, spec) in charts {
                serde_json::to_writer_pretty(&mut stdout, &spec.to_renderer_json())?;
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}
