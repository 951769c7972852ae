//! Command verb vocabulary
//!
//! Alias tables and classification sets shared by the mapper and the
//! dispatch layer. Alias lists follow the npm documentation, including
//! the typo aliases npm itself accepts.

/// Every alias that folds to the canonical `install` verb
pub const INSTALL_ALIASES: &[&str] = &[
    "install", "add", "i", "in", "ins", "inst", "insta", "instal", "isnt", "isnta", "isntal",
    "isntall",
];

/// Every alias that folds to the canonical `uninstall` verb
pub const UNINSTALL_ALIASES: &[&str] = &["uninstall", "unlink", "remove", "rm", "r", "un"];

/// Every alias that folds to the canonical `update` verb
pub const UPDATE_ALIASES: &[&str] = &["update", "up", "upgrade", "udpate"];

/// Dev-dependency flag spellings recognized on the command line
pub const DEV_FLAGS: &[&str] = &["-D", "--save-dev", "--dev"];

/// Known npm built-in commands that must not be shadowed by scripts
pub const NPM_BUILTINS: &[&str] = &[
    "access",
    "adduser",
    "audit",
    "bin",
    "bugs",
    "cache",
    "ci",
    "completion",
    "config",
    "dedupe",
    "deprecate",
    "diff",
    "dist-tag",
    "docs",
    "doctor",
    "edit",
    "exec",
    "explain",
    "explore",
    "fund",
    "help",
    "hook",
    "init",
    "install",
    "link",
    "ll",
    "login",
    "logout",
    "ls",
    "org",
    "outdated",
    "owner",
    "pack",
    "ping",
    "pkg",
    "prefix",
    "profile",
    "prune",
    "publish",
    "query",
    "rebuild",
    "repo",
    "restart",
    "root",
    "run",
    "run-script",
    "search",
    "set",
    "shrinkwrap",
    "star",
    "stars",
    "start",
    "stop",
    "team",
    "test",
    "token",
    "uninstall",
    "unpublish",
    "unstar",
    "update",
    "version",
    "view",
    "whoami",
];

/// Fold a user-supplied verb to its canonical form.
///
/// Unknown verbs come back unchanged; the mapper treats those as
/// possible script names.
pub fn normalize(verb: &str) -> &str {
    if INSTALL_ALIASES.contains(&verb) {
        "install"
    } else if UNINSTALL_ALIASES.contains(&verb) {
        "uninstall"
    } else if UPDATE_ALIASES.contains(&verb) {
        "update"
    } else {
        verb
    }
}

/// True if the verb is one of the canonical abstract verbs
pub fn is_canonical(verb: &str) -> bool {
    matches!(verb, "install" | "uninstall" | "update")
}

/// Install-like commands manage the dependency set themselves, so the
/// automatic freshness sync is skipped for them.
pub fn skips_auto_sync(verb: &str) -> bool {
    INSTALL_ALIASES.contains(&verb) || UNINSTALL_ALIASES.contains(&verb) || UPDATE_ALIASES.contains(&verb)
}

/// Commands that operate on the whole dependency set run at the
/// workspace root. A bare install (no packages named) installs the
/// workspace; an install naming packages targets the current package.
pub fn runs_at_workspace_root(verb: &str, args: &[String]) -> bool {
    if INSTALL_ALIASES.contains(&verb) {
        return args.is_empty();
    }
    UPDATE_ALIASES.contains(&verb) || matches!(verb, "audit" | "outdated")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_aliases_fold() {
        for alias in INSTALL_ALIASES {
            assert_eq!(normalize(alias), "install", "alias {alias}");
        }
    }

    #[test]
    fn uninstall_and_update_aliases_fold() {
        for alias in UNINSTALL_ALIASES {
            assert_eq!(normalize(alias), "uninstall");
        }
        for alias in UPDATE_ALIASES {
            assert_eq!(normalize(alias), "update");
        }
    }

    #[test]
    fn unknown_verbs_pass_through() {
        assert_eq!(normalize("build"), "build");
        assert_eq!(normalize("test"), "test");
    }

    #[test]
    fn auto_sync_skipped_for_install_like() {
        assert!(skips_auto_sync("i"));
        assert!(skips_auto_sync("rm"));
        assert!(skips_auto_sync("upgrade"));
        assert!(!skips_auto_sync("build"));
    }

    #[test]
    fn workspace_root_routing() {
        assert!(runs_at_workspace_root("install", &[]));
        assert!(!runs_at_workspace_root("install", &["express".to_string()]));
        assert!(runs_at_workspace_root("update", &["lodash".to_string()]));
        assert!(runs_at_workspace_root("audit", &[]));
        assert!(!runs_at_workspace_root("build", &[]));
    }
}
