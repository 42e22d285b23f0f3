//! Fixed inputs for a scrape run: the Unica site root, the restaurant pages
//! to visit, the CSS anchors the live driver polls for, and the polling
//! budgets.

use std::time::Duration;

pub const ROOT_URL: &str = "https://www.unica.fi/en/";

pub const RESTAURANT_URLS: [&str; 21] = [
    "https://www.unica.fi/en/restaurants/university-campus/assarin-ullakko/",
    "https://www.unica.fi/en/restaurants/university-campus/galilei/",
    "https://www.unica.fi/en/restaurants/university-campus/macciavelli/",
    "https://www.unica.fi/en/restaurants/university-campus/monttu-ja-mercatori/",
    "https://www.unica.fi/en/restaurants/kupittaa-campus/deli-pharma/",
    "https://www.unica.fi/en/restaurants/kupittaa-campus/delica/",
    "https://www.unica.fi/en/restaurants/kupittaa-campus/dental/",
    "https://www.unica.fi/en/restaurants/kupittaa-campus/kisalli/",
    "https://www.unica.fi/en/restaurants/kupittaa-campus/linus/",
    "https://www.unica.fi/en/restaurants/art-campus/sigyn/",
    "https://www.unica.fi/en/restaurants/others/unican-kulma/",
    "https://www.unica.fi/en/restaurants/others/fabrik-cafe/",
    "https://www.unica.fi/en/restaurants/others/piccu-maccia/",
    "https://www.unica.fi/en/restaurants/others/puutorin-nurkka/",
    "https://www.unica.fi/en/restaurants/other-restaurants/henkilostoravintola-waino/",
    "https://www.unica.fi/en/restaurants/other-restaurants/kaffeli/",
    "https://www.unica.fi/en/restaurants/other-restaurants/kaivomestari/",
    "https://www.unica.fi/en/restaurants/other-restaurants/lemminkainen/",
    "https://www.unica.fi/en/restaurants/other-restaurants/mairela/",
    "https://www.unica.fi/en/restaurants/other-restaurants/rammeri/",
    "https://www.unica.fi/en/restaurants/other-restaurants/ruokakello/",
];

/// Cookie-decline control on the site root.
pub const COOKIE_DECLINE_CSS: &str = "#declineButton";
/// One block per serving station; its presence means the restaurant serves
/// lunch today.
pub const MENU_PACKAGE_CSS: &str = ".lunch-menu-block__menu-package";
/// Collapsible headers gating lazily rendered day content.
pub const ACCORDION_CSS: &str = "button.compass-accordion__header";
/// A single dish slot; non-blank rendered text means client-side rendering
/// has finished.
pub const MEAL_ITEM_CSS: &str = ".meal-item";

/// Budget for the cookie banner to show up on the site root.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(3);
/// Budget for the first menu package to appear; expiry means "closed today".
pub const MENU_PRESENCE_TIMEOUT: Duration = Duration::from_secs(3);
/// Budget for accordion presence, interactability and the expansion
/// attribute flip.
pub const CONTROL_TIMEOUT: Duration = Duration::from_secs(6);
/// Overall budget for meal items to carry rendered text after every panel
/// has been expanded.
pub const RENDER_BUDGET: Duration = Duration::from_secs(30);
/// Interval between predicate probes at every wait site.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
