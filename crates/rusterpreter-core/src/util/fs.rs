use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};

/// Préfixe des fichiers source : doit rester un nom de crate valide pour rustc (pas de `-`).
pub const SRC_PREFIX: &str = "rusterp_src_";
pub const BIN_DIR_PREFIX: &str = "rusterp_bin_";
pub const BIN_NAME: &str = if cfg!(windows) { "repl_bin.exe" } else { "repl_bin" };

/// Cherche `program` comme `which` : chemin explicite, sinon chaque entrée de PATH.
pub fn find_on_path(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 {
        return is_executable(program).then(|| program.to_path_buf());
    }
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .flat_map(|dir| candidates(&dir, program.as_os_str()))
        .find(|p| is_executable(p))
}

fn candidates(dir: &Path, name: &OsStr) -> Vec<PathBuf> {
    let plain = dir.join(name);
    if cfg!(windows) {
        let mut exe = plain.clone().into_os_string();
        exe.push(".exe");
        vec![plain, exe.into()]
    } else {
        vec![plain]
    }
}

#[cfg(unix)]
fn is_executable(p: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    p.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(p: &Path) -> bool {
    p.is_file()
}

/// Fichier source temporaire au nom aléatoire (création exclusive), supprimé au drop.
pub fn scratch_source(source: &str) -> io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(SRC_PREFIX)
        .suffix(".rs")
        .tempfile()?;
    file.write_all(source.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Répertoire privé au nom aléatoire qui accueillera l'artefact compilé.
pub fn artifact_dir() -> io::Result<TempDir> {
    tempfile::Builder::new().prefix(BIN_DIR_PREFIX).tempdir()
}
