//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a swarmed command bound to this test's secrets directory.
    ///
    /// Inherited `SWARMED_*` settings are cleared so the host environment
    /// cannot leak into the test.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("swarmed").expect("failed to find swarmed binary");
        cmd.env("SWARMED_SECRETS_DIR", self.dir());
        cmd.env_remove("SWARMED_PREFIX");
        cmd.env_remove("SWARMED_REMOVE_VERSION_SUFFIX");
        cmd.env_remove("SWARMED_LOG_OVERRIDES");
        cmd.env_remove("SWARMED_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `swarmed run [flags] -- <command>`.
    pub fn run(&self, flags: &[&str], command: &[&str]) -> Output {
        self.cmd()
            .arg("run")
            .args(flags)
            .arg("--")
            .args(command)
            .output()
            .expect("failed to run swarmed run")
    }

    /// Shortcut for `swarmed run -- sh -c <script>`.
    #[cfg(unix)]
    pub fn sh(&self, flags: &[&str], script: &str) -> Output {
        self.run(flags, &["sh", "-c", script])
    }

    /// Shortcut for `swarmed keys [flags]`.
    pub fn keys(&self, flags: &[&str]) -> Output {
        self.cmd()
            .arg("keys")
            .args(flags)
            .output()
            .expect("failed to run swarmed keys")
    }
}
