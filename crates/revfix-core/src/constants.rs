/// revfix version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default temporal window between a finding and its fix (hours).
pub const DEFAULT_TEMPORAL_WINDOW_HOURS: i64 = 72;

/// Default proximity window for the same-PR heuristic (minutes).
pub const DEFAULT_SAME_PR_WINDOW_MINUTES: i64 = 60;

/// Pairs scoring below this are not stored.
pub const DEFAULT_STORAGE_THRESHOLD: f64 = 0.0;

/// Pairs scoring at or above this are promoted.
pub const DEFAULT_PROMOTION_THRESHOLD: f64 = 0.75;

/// Distinct files a single fix must touch to count as a formatter batch.
pub const DEFAULT_FORMATTER_BATCH_MIN_FILES: usize = 10;

/// Verification confidence deltas. Frozen: changing any value is a versioned
/// contract change.
pub mod deltas {
    pub const STILL_PRESENT: f64 = -0.20;
    pub const CONFIG_ONLY: f64 = -0.10;
    pub const DISAPPEARS_WITHOUT_MOD: f64 = -0.15;
    pub const CONFIRMED: f64 = 0.0;
}

/// Reward values per terminal outcome. Frozen.
pub mod rewards {
    pub const PREEMPTIVE_AVOIDANCE: f64 = 1.0;
    pub const CODEMOD_FIX: f64 = 0.8;
    pub const MANUAL_RESOLUTION: f64 = 0.5;
    pub const REINTRODUCED: f64 = -1.0;
    pub const REPEATED_VIOLATION: f64 = -2.0;
}

/// Lint/format configuration files recognized at any directory depth.
pub const DEFAULT_CONFIG_FILE_PATTERNS: &[&str] = &[
    "pyproject.toml",
    "setup.cfg",
    "tox.ini",
    ".flake8",
    ".pylintrc",
    "pylintrc",
    "mypy.ini",
    ".mypy.ini",
    "ruff.toml",
    ".ruff.toml",
    ".eslintrc*",
    "eslint.config.*",
    ".prettierrc*",
    "prettier.config.*",
    "biome.json",
    "biome.jsonc",
    ".editorconfig",
    ".golangci.yml",
    ".golangci.yaml",
    "rustfmt.toml",
    ".rustfmt.toml",
    "clippy.toml",
    ".clippy.toml",
    ".rubocop.yml",
    ".stylelintrc*",
    ".pre-commit-config.yaml",
];
