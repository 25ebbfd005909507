use clap::Parser;
use cucumber_results::build::build_model::BuildSubmission;
use cucumber_results::cli::commands::{
    cmd_ingest, cmd_list, cmd_report, cmd_report_index, cmd_show,
};
use cucumber_results::cli::config::{Cli, Commands, load_config, resolve_data_dir, resolve_format};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve the data directory: CLI > config > default
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &config);

    match cli.command {
        Commands::Ingest {
            input,
            job_name,
            build_number,
            build_url,
            branch,
            commit,
        } => {
            let submission = BuildSubmission {
                job_name,
                build_number,
                build_url,
                branch,
                commit,
            };
            cmd_ingest(&data_dir, &input, submission, cli.verbose)?;
        }
        Commands::List { format } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_list(&data_dir, &format, cli.verbose)?;
        }
        Commands::Show { id, format } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_show(&data_dir, &id, &format)?;
        }
        Commands::Report { id, format, output } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_report(&data_dir, &id, &format, output.as_deref())?;
        }
        Commands::ReportIndex { output } => {
            cmd_report_index(&data_dir, output.as_deref())?;
        }
    }

    Ok(())
}
