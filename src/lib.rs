//! # lectern
//!
//! Two small building blocks: a generic FIFO [`Queue`] and [`Drawable`]
//! text trees that render by concatenation.
//!
//! ## Queue
//!
//! ```rust
//! use lectern::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//! assert_eq!(queue.to_string(), "[1, 2, 3]");
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.peek_all().copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```
//!
//! ## Drawings
//!
//! ```rust
//! use lectern::{caps, draw, make_greeting, Drawable};
//!
//! let line = draw![
//!     Drawable::stars(3),
//!     "Hello",
//!     Drawable::space(),
//!     caps!["World!"],
//!     Drawable::stars(2),
//! ];
//! assert_eq!(line.render(), "***Hello WORLD!**");
//! assert_eq!(line, make_greeting(None));
//! ```

pub mod config;
pub mod debug;
pub mod drawing;
pub mod errors;
pub mod queue;

pub use config::{DrawingConfig, LecternConfig, NegativeLengthPolicy, QueueConfig};
pub use debug::{DebugCategory, DebugConfig, LogLevel};
pub use drawing::{Drawable, Drawing, either, make_greeting};
pub use errors::DrawError;
pub use queue::Queue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_queue_and_drawing() {
        let config = LecternConfig::from_json(
            r#"{"queue": {"initial_capacity": 4}, "drawing": {"fill": "~"}}"#,
        )
        .unwrap();

        let mut lines: Queue<Drawable> = Queue::from_config(&config.queue);
        lines.enqueue(Drawable::run_with(2, &config.drawing).unwrap());
        lines.enqueue(make_greeting(Some("queue")));

        let rendered: Vec<String> = lines.into_iter().map(|line| line.render()).collect();
        assert_eq!(rendered, vec!["~~", "***Hello QUEUE!**"]);
    }

    #[test]
    fn macro_line_equals_generic_greeting_tree() {
        let line = draw![
            Drawable::stars(3),
            "Hello",
            Drawable::space(),
            caps!["World!"],
            Drawable::stars(2),
        ];
        assert_eq!(line, make_greeting(None));

        // Same render, different tree
        let lower = draw![
            Drawable::stars(3),
            "Hello",
            Drawable::space(),
            caps!["world!"],
            Drawable::stars(2),
        ];
        assert_eq!(lower.render(), line.render());
        assert_ne!(lower, line);
    }

    #[test]
    fn default_policy_rejects_negative_runs() {
        let config = LecternConfig::default();
        let err = Drawable::run_with(-2, &config.drawing).unwrap_err();
        assert_eq!(err.to_string(), "Repeat length must not be negative, got -2");
    }
}
