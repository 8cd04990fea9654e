// Letter assembly: tone/language transition tables, field connectors, and the
// deterministic assembler behind the live preview and the exporters.

pub mod assembler;
pub mod handlers;
pub mod locale;
pub mod phrasing;
pub mod transitions;
