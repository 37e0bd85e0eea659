// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Chat Relay
//!
//! A minimal chat relay: accepts a user text message, forwards it to a
//! hosted large-language-model chat-completion endpoint, and returns
//! the model's reply or a normalized error string.
//!
//! Ordinary failures never reach the caller as errors; they come back
//! as error-shaped strings. Only fatal runtime conditions and missing
//! configuration propagate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chat_relay::{MessageRelay, RelaySettings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = RelaySettings::new(
//!         "https://my-deployment.inference.example",
//!         "my-api-key",
//!         None, // deployment defaults to "Phi-4"
//!     )?;
//!
//!     let relay = MessageRelay::new(settings);
//!     let reply = relay.send("Hello!").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod relay;
pub mod settings;

pub use relay::{
    ChatCompleter, ChatMessageRequest, ChatMessageResponse, CompletionError, CompletionRequest,
    FatalError, HttpChatCompleter, MessageRelay, NO_RESPONSE_MESSAGE, UNEXPECTED_ERROR_MESSAGE,
};
pub use settings::{RelaySettings, SettingsError, DEFAULT_DEPLOYMENT_NAME};
