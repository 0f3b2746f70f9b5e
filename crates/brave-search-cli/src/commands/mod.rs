pub mod call;
pub mod serve;
pub mod tools;

pub use call::CallCommand;
pub use tools::ToolsCommand;
