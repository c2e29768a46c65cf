mod azure_ai;
mod chat_assistant;
mod creator_ai;
mod error_handling;
mod normalize;

pub use azure_ai::{
    AzureAiClient, CompletionRequest, CompletionTransport, MockCompletionTransport, PromptMessage,
    ReqwestTransport, TransportReply,
};
pub use chat_assistant::ChatAssistant;
pub use creator_ai::CreatorAiService;
pub use error_handling::{AiError, UserErrorFormatter};
pub use normalize::{Decoded, decode_list, excerpt};
