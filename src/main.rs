// Wren - interactive shell front-end
// Main entry point

use anyhow::Result;
use std::process::Command;
use std::sync::Arc;

use wren::complete::PathScanCompleter;
use wren::editor::{KeyBindings, ReadlineEditor};
use wren::env::{load_env, Env};
use wren::prompt::{TemplatePrompt, DEFAULT_TEMPLATE};
use wren::session::{Executor, Session};

/// Demo executor: runs each accepted line through `sh -c`. The `exit`
/// builtin sets the session's exit flag instead of spawning.
struct SystemExecutor {
    env: Arc<Env>,
}

impl Executor for SystemExecutor {
    fn execute(&mut self, line: &str) -> Result<()> {
        if line.trim() == "exit" {
            self.env.request_exit();
            return Ok(());
        }
        let status = Command::new("sh").arg("-c").arg(line).status()?;
        if !status.success() {
            tracing::debug!("command exited with {status}");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let env = load_env()?;
    let executor = SystemExecutor {
        env: Arc::clone(&env),
    };

    let mut session = Session::new(
        env,
        Box::new(PathScanCompleter::new()),
        KeyBindings::standard(),
        ReadlineEditor::new(),
        TemplatePrompt::new(DEFAULT_TEMPLATE),
        executor,
    );
    session.run(Some("wren 0.3.2 (type 'exit' or Ctrl-D to leave)"))?;

    Ok(())
}
