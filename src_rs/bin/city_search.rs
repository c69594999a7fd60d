use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;

use city_search::cli::args::CliArgs;
use city_search::cli::logging::init_tracing;
use city_search::cli::shell::run_session;
use city_search::core::errors::{CoreError, CoreResult};
use city_search::core::point_store::PointStore;
use city_search::core::search_pipeline::execute_search;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("오류: {}", failure);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> CoreResult<()> {
    let config = args.resolve_config()?;
    init_tracing(&config.log_level)?;

    let store = PointStore::load_from_path(&config.data_path)?;

    if let Some(request) = args.one_shot_request()? {
        let result = execute_search(&store, &request)?;
        let json = serde_json::to_string_pretty(&result).map_err(|error| {
            CoreError::Serialization(format!("검색 결과 직렬화 실패: {}", error))
        })?;
        println!("{}", json);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_session(&store, stdin.lock(), stdout.lock(), &config.exit_sentinel)?;
    info!(
        queries = summary.queries_served,
        rejected = summary.rejected_inputs,
        "셸 세션 종료"
    );
    Ok(())
}
