//! Greeting line composed from drawing nodes

use super::Drawable;
use crate::{caps, draw};

/// Build `***Hello <NAME>!**`, falling back to `WORLD` when no name is given
pub fn make_greeting(name: Option<&str>) -> Drawable {
    let who = match name {
        Some(name) => Drawable::text(format!("{name}!")),
        None => Drawable::text("World!"),
    };

    draw![
        Drawable::stars(3),
        "Hello",
        Drawable::space(),
        caps![who],
        Drawable::stars(2),
    ]
}
