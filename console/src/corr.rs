use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use countcorr::io::read_count_table;
use countcorr::CorrelationReport;
use log::info;

#[derive(Args, Debug, Clone)]
pub(crate) struct CorrArgs {
    #[arg(help = "Path of the input CSV file.")]
    input: PathBuf,
    #[arg(
        short,
        long,
        required = true,
        help = "Name of the response column."
    )]
    response: String,
    #[arg(
        short,
        long,
        required = true,
        help = "Name of the predictor column."
    )]
    predictor: String,
    #[arg(
        short,
        long,
        required = false,
        help = "Path for the rendered HTML plot."
    )]
    output: Option<PathBuf>,
    #[arg(long, required = false, help = "Path for the JSON fit summary.")]
    json: Option<PathBuf>,
    #[arg(short, long, default_value_t = false, help = "Verbose logging.")]
    verbose: bool,
}

impl CorrArgs {
    pub(crate) fn setup(&self) {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(if self.verbose {
            log::LevelFilter::Debug
        }
        else {
            log::LevelFilter::Warn
        });
        let _ = builder.try_init();
    }

    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let table = read_count_table(&self.input)?;
        let report =
            CorrelationReport::build(&table, &self.response, &self.predictor)?;
        let stats = report.stats();

        println!(
            "lm(log1p({}) ~ log1p({})), n = {}",
            self.response,
            self.predictor,
            stats.n_obs()
        );
        println!(
            "slope     = {:>12.6} (se {:.6}, t {:.4}, p {:.4e})",
            stats.slope(),
            stats.slope_std_err(),
            stats.slope_t_value(),
            stats.slope_p_value()
        );
        println!(
            "intercept = {:>12.6} (se {:.6})",
            stats.intercept(),
            stats.intercept_std_err()
        );
        println!(
            "residual std. error = {:.6} on {} degrees of freedom",
            stats.residual_std_err(),
            stats.df_residual()
        );
        println!(
            "R^2 = {:.6}, adj. R^2 = {:.6}",
            stats.r_squared(),
            stats.adj_r_squared()
        );

        if let Some(path) = &self.json {
            let json = serde_json::to_string_pretty(stats)
                .context("Failed to serialize fit summary")?;
            let mut file = File::create(path).with_context(|| {
                format!("Failed to create '{}'", path.display())
            })?;
            file.write_all(json.as_bytes()).with_context(|| {
                format!("Failed to write '{}'", path.display())
            })?;
            info!("Wrote fit summary to {}", path.display());
        }

        if let Some(path) = &self.output {
            report.render().write_html(path);
            info!("Wrote plot to {}", path.display());
        }

        Ok(())
    }
}
