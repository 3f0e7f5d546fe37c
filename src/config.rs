use std::path::PathBuf;

/// Server name advertised during the initialize handshake.
pub const SERVER_NAME: &str = "phrase-lsp";

/// Phrase flagged as an error wherever it appears.
pub const BANNED_PHRASE: &str = "VS Code";

/// Censored rendering of the banned phrase, offered by the censor action.
pub const CENSORED_PHRASE: &str = "VS C*de";

/// Phrase celebrated with a hint diagnostic.
pub const PREFERRED_PHRASE: &str = "Neovim";

/// Returns the path to the data directory for phrase-lsp.
/// Uses $XDG_DATA_HOME/phrase-lsp if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/phrase-lsp,
/// or ./phrase-lsp if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("phrase-lsp.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("phrase-lsp")
}
