use chrono::Local;
use rand::Rng;
use std::path::PathBuf;

use crate::{
    cli::{CreateArgs, ListArgs},
    config::Config,
    constants::{DEFAULT_BRANCH, INITIAL_COMMIT_MESSAGE, ORIGIN_REMOTE},
    env::UserEnv,
    error::Result,
    hosting::{GitHubClient, RepositoryHost},
    naming::{random_prefix, ProjectName},
    outcome::StepOutcome,
    registry::Registry,
    renderer::{BoilerplateContext, BoilerplateRenderer},
    scaffold::scaffold_project,
    vcs::{GitCli, VersionControl},
};

/// Fully resolved inputs for one `create` invocation.
///
/// Name pieces, paths, and the invoking user are decided up front; from here
/// on nothing reads the process environment or the RNG.
pub struct CreateOptions {
    pub name: ProjectName,
    pub project_dir: PathBuf,
    pub description: String,
    pub git_init: bool,
    pub user: String,
    pub registry_path: PathBuf,
}

impl CreateOptions {
    /// Resolves CLI arguments against the configuration: positional args win,
    /// then config values, then the built-in fallbacks already folded into
    /// the config defaults.
    pub fn resolve<R: Rng + ?Sized>(
        args: &CreateArgs,
        config: &Config,
        env: &UserEnv,
        rng: &mut R,
    ) -> Self {
        // An explicitly empty `--prefix` counts as absent; every identifier
        // component must be non-empty.
        let prefix = match args.prefix.as_deref().map(str::trim) {
            Some(prefix) if !prefix.is_empty() => prefix.to_string(),
            _ => random_prefix(rng).to_string(),
        };
        let project_type = args.project_type.as_ref().unwrap_or(&config.default_type);
        let domain = args.domain.as_ref().unwrap_or(&config.default_domain);
        let name = ProjectName::new(&prefix, project_type, domain);

        let root = args.dir.clone().unwrap_or_else(|| config.root_dir.clone());
        let project_dir = root.join(name.slug());

        Self {
            name,
            project_dir,
            description: args.desc.clone().unwrap_or_default(),
            git_init: config.git_init,
            user: env.user.clone(),
            registry_path: env.registry_path(),
        }
    }
}

/// What one `create` invocation did, step by step.
#[derive(Debug)]
pub struct CreateReport {
    pub identifier: String,
    pub project_dir: PathBuf,
    pub git: StepOutcome,
    pub hosting: StepOutcome,
    pub remote_url: Option<String>,
    pub registry: StepOutcome,
}

/// Scaffolds the project and runs the best-effort bootstrap stages.
///
/// Scaffolding failures abort with an error. Everything after that is
/// best-effort: git, hosting, and the registry append each report a
/// [`StepOutcome`] and never fail the invocation.
pub fn create_project(
    opts: &CreateOptions,
    vcs: &dyn VersionControl,
    host: Option<&dyn RepositoryHost>,
) -> Result<CreateReport> {
    let renderer = BoilerplateRenderer::new()?;
    let context = BoilerplateContext {
        name: opts.name.to_string(),
        slug: opts.name.slug(),
        user: opts.user.clone(),
        description: opts.description.clone(),
        type_tag: opts.name.type_tag().to_string(),
        domain: opts.name.domain().to_string(),
        created: Local::now().format("%Y-%m-%d").to_string(),
    };
    scaffold_project(&opts.project_dir, &renderer, &context)?;

    let git = if opts.git_init {
        let result = vcs
            .init(&opts.project_dir)
            .and_then(|()| vcs.commit_all(&opts.project_dir, INITIAL_COMMIT_MESSAGE));
        if let Err(e) = &result {
            log::warn!("Local git bootstrap failed: {e}");
        }
        StepOutcome::from(result)
    } else {
        StepOutcome::Skipped
    };

    let mut remote_url = None;
    let hosting = match host {
        Some(host) if opts.git_init => {
            match bootstrap_remote(opts, vcs, host) {
                Ok(url) => {
                    remote_url = Some(url);
                    StepOutcome::Succeeded
                }
                Err(e) => {
                    eprintln!("Remote repository setup failed: {e}");
                    StepOutcome::Failed(e.to_string())
                }
            }
        }
        _ => StepOutcome::Skipped,
    };

    let registry = Registry::new(opts.registry_path.clone());
    let registry = StepOutcome::from(
        registry.append(&opts.name.to_string(), &opts.project_dir),
    );
    if let StepOutcome::Failed(reason) = &registry {
        log::warn!("Could not append to the project registry: {reason}");
    }

    Ok(CreateReport {
        identifier: opts.name.to_string(),
        project_dir: opts.project_dir.clone(),
        git,
        hosting,
        remote_url,
        registry,
    })
}

/// Creates the remote repository and pushes the initial commit.
///
/// The login lookup gates the whole step: a bad or expired token fails here,
/// before anything is created remotely.
fn bootstrap_remote(
    opts: &CreateOptions,
    vcs: &dyn VersionControl,
    host: &dyn RepositoryHost,
) -> Result<String> {
    let login = host.current_user_login()?;
    log::debug!("Authenticated to the hosting API as '{login}'.");

    let repo = host.create_repository(&opts.name.slug(), &opts.description)?;
    vcs.add_remote(&opts.project_dir, ORIGIN_REMOTE, &repo.clone_url)?;
    vcs.push(&opts.project_dir, ORIGIN_REMOTE, DEFAULT_BRANCH)?;
    Ok(repo.html_url)
}

fn summary_lines(report: &CreateReport, git_init: bool) -> Vec<String> {
    let mut lines = vec![
        format!("Created project: {}", report.identifier),
        format!("Location: {}", report.project_dir.display()),
    ];
    if git_init {
        lines.push(format!("Git initialized: {}", report.git));
    }
    if !report.hosting.is_skipped() {
        match &report.remote_url {
            Some(url) => {
                lines.push(format!("GitHub repository created: {url}"));
                lines.push("Initial commit pushed: ✅".to_string());
            }
            None => lines.push(format!("GitHub repository: {}", report.hosting)),
        }
    }
    if let StepOutcome::Failed(_) = &report.registry {
        lines.push(format!("Registry entry: {}", report.registry));
    }
    lines
}

fn print_summary(report: &CreateReport, git_init: bool) {
    for line in summary_lines(report, git_init) {
        println!("{line}");
    }
}

/// Entry point for `dnp create`.
pub fn run_create(args: CreateArgs) -> Result<()> {
    let env = UserEnv::from_process_env()?;
    let config = Config::load(&env);
    let mut rng = rand::rng();
    let opts = CreateOptions::resolve(&args, &config, &env, &mut rng);

    let client = (config.git_init && !config.github_token.is_empty())
        .then(|| GitHubClient::new(config.github_token.clone()));
    let host = client.as_ref().map(|c| c as &dyn RepositoryHost);

    let report = create_project(&opts, &GitCli, host)?;
    print_summary(&report, opts.git_init);
    Ok(())
}

/// Entry point for `dnp list`.
pub fn run_list(_args: ListArgs) -> Result<()> {
    let env = UserEnv::from_process_env()?;
    let registry = Registry::new(env.registry_path());
    match registry.read_all() {
        Some(contents) => {
            println!("== D Project Registry ==");
            print!("{contents}");
        }
        None => println!("No projects created yet."),
    }
    Ok(())
}
