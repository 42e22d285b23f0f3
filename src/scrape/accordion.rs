use tracing::debug;

use super::driver::{DriverError, ElementHandle};
use super::wait::poll_until;
use crate::config::{CONTROL_TIMEOUT, POLL_INTERVAL};

/// Expansion state of one accordion control. The page communicates the state
/// through the `aria-expanded` attribute; clicking a collapsed control asks
/// the client-side framework to flip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanding,
    Expanded,
    /// Never reported expanded within budget, even after a retry. Tolerated;
    /// the panel's content is simply missing from the snapshot.
    Stuck,
}

const MAX_CLICKS: u8 = 2;

/// Drives one control to its expanded state: scroll it into the viewport,
/// wait until it accepts clicks, then click and wait for the attribute flip,
/// retrying once before giving up.
pub async fn expand<H: ElementHandle>(control: &H) -> Result<PanelState, DriverError> {
    control.scroll_into_view().await?;
    let interactable = poll_until(CONTROL_TIMEOUT, POLL_INTERVAL, || control.can_interact()).await;
    if !interactable.satisfied() {
        return Ok(PanelState::Stuck);
    }

    let mut clicks: u8 = 0;
    let mut state = PanelState::Collapsed;
    loop {
        state = match state {
            PanelState::Collapsed => {
                // a missing attribute means the control is not gating anything
                if control.attribute("aria-expanded").await?.as_deref() == Some("false") {
                    control.click().await?;
                    clicks += 1;
                    PanelState::Expanding
                } else {
                    PanelState::Expanded
                }
            }
            PanelState::Expanding => {
                let flipped = poll_until(CONTROL_TIMEOUT, POLL_INTERVAL, || async move {
                    control.attribute("aria-expanded").await.ok().flatten().as_deref()
                        == Some("true")
                })
                .await;
                if flipped.satisfied() {
                    PanelState::Expanded
                } else if clicks < MAX_CLICKS {
                    debug!("panel expansion timed out, retrying");
                    PanelState::Collapsed
                } else {
                    PanelState::Stuck
                }
            }
            done @ (PanelState::Expanded | PanelState::Stuck) => return Ok(done),
        };
    }
}
