//! Configuration and constants for the CLI.

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Directory all outputs are written into unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "analysis";

// Output file naming: <output_name><suffix>
pub const ALL_PLOT_SUFFIX: &str = "_all.png";
pub const ONLY_DEBUG_PLOT_SUFFIX: &str = "_only_debug.png";
pub const REPORT_SUFFIX: &str = ".txt";
pub const SUMMARY_SUFFIX: &str = ".json";
pub const ASSEMBLY_CONTEXT_FILE: &str = "assembly_context.txt";

/// Reference address drawn as a guide line on the plots.
/// Never used to filter points.
pub const THRESHOLD_ADDRESS_LITERAL: &str = "0x640b5eece000";

// Assembly context window around each matching listing line
pub const DEFAULT_LINES_ABOVE: usize = 5;
pub const DEFAULT_LINES_BELOW: usize = 10;

// Figure defaults (14x6 inches at 100 dpi)
pub const DEFAULT_PLOT_WIDTH: u32 = 1400;
pub const DEFAULT_PLOT_HEIGHT: u32 = 600;

/// Token index of the memory address in both log formats
pub const ADDRESS_TOKEN_INDEX: usize = 1;

/// Token index of the instruction address in tool logs
/// (`MemoryAddress: 0x.. InsAddress: 0x..`)
pub const INSTRUCTION_TOKEN_INDEX: usize = 3;
