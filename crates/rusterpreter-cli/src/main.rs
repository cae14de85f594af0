use std::io::IsTerminal;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rusterpreter_core::{
    Classification, CompilerConfig, ExecFailurePolicy, Native, Rustc, Scripted, Session,
    SessionConfig,
};

mod banner;
mod console;

#[derive(Parser, Debug)]
#[command(
    name = "rusterpreter",
    version,
    about = "REPL Rust : chaque ligne est recompilée avec rustc puis exécutée",
    long_about = None
)]
pub struct Cli {
    /// Verbosité des logs (répéter pour plus de bruit)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Compilateur à utiliser (nom cherché dans PATH ou chemin)
    #[arg(long, default_value = "rustc")]
    compiler: Utf8PathBuf,

    /// Argument supplémentaire passé au compilateur avant le source (répétable)
    #[arg(long = "compiler-arg", value_name = "ARG", allow_hyphen_values = true)]
    compiler_args: Vec<String>,

    /// Invite affichée avant chaque lecture
    #[arg(long, default_value = "rust> ")]
    prompt: String,

    /// Règle de détection d'un échec de compilation
    #[arg(long, value_enum, default_value_t = ClassifyArg::ErrorSubstring)]
    classify: ClassifyArg,

    /// Comportement si le binaire compilé ne peut pas être lancé
    #[arg(long, value_enum, default_value_t = ExecFailureArg::Abort)]
    on_exec_failure: ExecFailureArg,

    /// Ne pas afficher le programme assemblé
    #[arg(long)]
    hide_source: bool,

    /// Pas de bannière au démarrage
    #[arg(long)]
    no_banner: bool,

    /// Sortie sans couleurs
    #[arg(long)]
    no_color: bool,

    /// Évalue ces lignes (dans l'ordre) puis quitte, sans mode interactif
    #[arg(short, long = "eval", value_name = "LINE")]
    eval: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ClassifyArg {
    ErrorSubstring,
    ExitStatus,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ExecFailureArg {
    Abort,
    Report,
}

impl Cli {
    fn compiler_config(&self) -> CompilerConfig {
        CompilerConfig {
            compiler: self.compiler.clone(),
            extra_args: self.compiler_args.clone(),
            classification: match self.classify {
                ClassifyArg::ErrorSubstring => Classification::ErrorSubstring,
                ClassifyArg::ExitStatus => Classification::ExitStatus,
            },
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            prompt: self.prompt.clone(),
            show_source: !self.hide_source,
            exec_failure: match self.on_exec_failure {
                ExecFailureArg::Abort => ExecFailurePolicy::Abort,
                ExecFailureArg::Report => ExecFailurePolicy::Report,
            },
            ..SessionConfig::default()
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Pas de RUST_LOG : la verbosité vient uniquement de -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    let interactive = cli.eval.is_empty();
    if cli.no_color || !std::io::stdout().is_terminal() {
        yansi::disable();
    }
    if interactive && !cli.no_banner {
        banner::show("Rusterpreter", env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"));
    }

    let rustc = Rustc::probe(&cli.compiler_config())?;
    let mut session = Session::new(rustc, Native, cli.session_config());
    let mut sink = console::Console;

    if interactive {
        let mut input = console::Readline::new()?;
        session.run(&mut input, &mut sink)?;
    } else {
        session.run(&mut Scripted::new(cli.eval.iter().cloned()), &mut sink)?;
    }
    Ok(())
}
