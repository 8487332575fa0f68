use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ReplayConfig;
use crate::decode::DecodeAdapter;
use crate::display::{DisplaySink, MessageLog, attach_display};
use crate::error::ReplayError;
use crate::replay::ReplayController;


// Decodes the configured game and builds a controller with the display already attached.
//
// Errors are reported to `messages` and returned; in that case no controller exists and the
// display keeps whatever it showed before. Deciding whether an error is worth a blocking
// notice is up to the caller (see `ReplayError::is_fatal`).
pub async fn start_replay(
    adapter: &DecodeAdapter, config: &ReplayConfig, display: Rc<RefCell<dyn DisplaySink>>,
    messages: &mut dyn MessageLog,
) -> Result<ReplayController, ReplayError> {
    messages.show_message(&format!("match in compressed notation: {}", config.game));
    let mut controller = adapter
        .decode(&config.game)
        .await
        .and_then(ReplayController::new)
        .inspect_err(|err| messages.show_message(&err.to_string()))?;
    attach_display(&mut controller, display);
    Ok(controller)
}
