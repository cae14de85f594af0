//! Aucun fichier de travail ne doit survivre à une session, réussie ou non.
//!
//! Binaire de test à part : `override_temp_dir` est global au processus.

use std::fs;
use std::path::Path;

use rusterpreter_core::{
    Channel, CompilerConfig, Native, Recorder, Rustc, Scripted, Session, SessionConfig,
};

fn leftovers(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("rusterp_"))
        .collect()
}

#[test]
fn session_leaves_no_scratch_files() {
    let root = tempfile::tempdir().unwrap();
    tempfile::env::override_temp_dir(root.path()).unwrap();

    let rustc = match Rustc::probe(&CompilerConfig::default()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("(skip) {e}");
            return;
        }
    };
    assert!(leftovers(root.path()).is_empty());

    let mut s = Session::new(rustc, Native, SessionConfig::default());
    let mut out = Recorder::default();
    // succès, liaison, échec de compilation, puis relance sur ligne vide
    let lines = ["1", "let a = 2", "bad bad", "a", "", "exit"];
    s.run(&mut Scripted::new(lines), &mut out).unwrap();

    assert_eq!(out.on(Channel::Output), ["1", "()", "2", "2"]);
    assert_eq!(s.history().len(), 3);
    assert_eq!(leftovers(root.path()), Vec::<String>::new());
}
