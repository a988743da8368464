
use crate::shell::DEFAULT_PROMPT;
use crate::{Error, Result};
use std::{
    env::{self, VarError},
    path::PathBuf,
    sync::OnceLock,
};

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
#[derive(Debug)]
pub struct Config {
    pub ASSET_DIR: PathBuf,
    pub PROMPT: String,
}

impl Config {
    fn load_from_env() -> Result<Config> {
        Ok(Config {
            ASSET_DIR: PathBuf::from(get_env_or("LAVANDEROS_ASSET_DIR", ".")?),
            PROMPT: get_env_or("LAVANDEROS_PROMPT", DEFAULT_PROMPT)?,
        })
    }
}

fn get_env_or(name: &'static str, default: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default.to_string()),
        Err(VarError::NotUnicode(_)) => Err(Error::ConfigInvalidEnv(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::get_env_or;

    #[test]
    fn missing_env_falls_back() {
        let value = get_env_or("LAVANDEROS_TEST_SURELY_UNSET", "fallback").unwrap();
        assert_eq!(value, "fallback");
    }
}
