#![allow(dead_code)]

use taskbot::config::Config;
use taskbot::exec::Invocation;
use taskbot::types::Mode;

/// Builder for `Invocation` to simplify test setup.
pub struct InvocationBuilder {
    mode: Mode,
    label: String,
    command: Vec<String>,
    interpreter: Option<String>,
}

impl InvocationBuilder {
    /// Shell-mode invocation running `cmd` through `sh -c`.
    pub fn shell(label: &str, cmd: &str) -> Self {
        Self {
            mode: Mode::Shell,
            label: label.to_string(),
            command: vec![cmd.to_string()],
            interpreter: None,
        }
    }

    /// Script-mode invocation running `script` through the interpreter.
    pub fn script(label: &str, script: &str) -> Self {
        Self {
            mode: Mode::Script,
            label: label.to_string(),
            command: vec![script.to_string()],
            interpreter: None,
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.command.push(arg.to_string());
        self
    }

    pub fn interpreter(mut self, prog: &str) -> Self {
        self.interpreter = Some(prog.to_string());
        self
    }

    pub fn build(self) -> Invocation {
        let inv = Invocation::new(self.mode, &self.label, self.command)
            .expect("Failed to build valid invocation from builder");
        match self.interpreter {
            Some(prog) => inv.with_interpreter(prog),
            None => inv,
        }
    }
}

/// A config pointing at `api_base_url` with throwaway credentials.
pub fn test_config(api_base_url: &str) -> Config {
    Config::new_unchecked("123456:TEST-TOKEN", "42").with_api_base_url(api_base_url)
}
