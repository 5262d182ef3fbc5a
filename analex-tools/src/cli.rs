use std::ffi::OsString;

use clap::Parser;

/// Analiza morfologiczna pojedynczego słowa arabskiego, wynik jako JSON.
///
/// Narzędzie nie ma żadnych flag: każdy argument, także `-h` czy `--`,
/// jest traktowany jako słowo.
#[derive(Debug, Parser)]
#[command(name = "analyze-word", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Słowo do analizy. Brak słowa kończy się błędem w formacie JSON.
    #[arg(allow_hyphen_values = true)]
    pub word: Option<String>,

    /// Dalsze argumenty są ignorowane.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parsuje argumenty procesu; przy błędzie clap kończy proces.
    pub fn from_env() -> Self {
        match Self::try_from_args(std::env::args_os()) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }

    /// Wstawia `--` zaraz po nazwie programu, więc clap traktuje wszystkie
    /// dalsze argumenty (łącznie z kolejnym `--`) jako pozycyjne.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("analyze-word"));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(args);
        Self::try_parse_from(escaped)
    }
}
