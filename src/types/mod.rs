// Public modules
pub mod content_part;
pub mod model;
pub mod output_text_delta_event;
pub mod output_text_done_event;
pub mod response;
pub mod response_completed_event;
pub mod response_create_params;
pub mod response_error_event;
pub mod response_stream_event;
pub mod tool_call_begin_event;
pub mod tool_call_completed_event;
pub mod tool_call_delta_event;
pub mod tool_call_output_event;
pub mod tool_param;
pub mod turn;

// Re-exports
pub use content_part::{ContentPart, InputText, OutputText};
pub use model::{KnownModel, Model};
pub use output_text_delta_event::OutputTextDeltaEvent;
pub use output_text_done_event::OutputTextDoneEvent;
pub use response::Response;
pub use response_completed_event::ResponseCompletedEvent;
pub use response_create_params::ResponseCreateParams;
pub use response_error_event::ResponseErrorEvent;
pub use response_stream_event::ResponseStreamEvent;
pub use tool_call_begin_event::{ToolCallBeginEvent, ToolRef};
pub use tool_call_completed_event::ToolCallCompletedEvent;
pub use tool_call_delta_event::ToolCallDeltaEvent;
pub use tool_call_output_event::ToolCallOutputEvent;
pub use tool_param::{ApprovalPolicy, McpToolParam, ToolParam};
pub use turn::{Role, Turn};
