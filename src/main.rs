use dnp::{
    cli::{get_log_level_from_verbose, parse_cli, run_create, run_list, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let result = match cli.command {
        Commands::Create(args) => {
            let level = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(level).init();
            run_create(args)
        }
        Commands::List(args) => {
            let level = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(level).init();
            run_list(args)
        }
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
