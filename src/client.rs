//! The seam `Move::execute` calls through to submit a chosen move to a real
//! game client. The client itself is out of scope for this crate; this
//! trait and its test double exist only so the seam can be exercised.

use crate::board::chess_move::Move;

pub trait MoveSink {
    /// Submits a move using 1-indexed algebraic coordinates and the
    /// promotion kind name (e.g. `"queen"`), or `None` when the move does
    /// not promote.
    fn submit_move(&mut self, from: &str, to: &str, promotion: Option<&str>);
}

pub fn execute(mv: &Move, sink: &mut dyn MoveSink) {
    let promotion = mv.promotion.map(|p| p.to_kind().name());
    sink.submit_move(&mv.from.to_algebraic(), &mv.to.to_algebraic(), promotion);
}

#[derive(Default)]
pub struct RecordingSink {
    pub submitted: Vec<(String, String, Option<String>)>,
}

impl MoveSink for RecordingSink {
    fn submit_move(&mut self, from: &str, to: &str, promotion: Option<&str>) {
        self.submitted
            .push((from.to_string(), to.to_string(), promotion.map(String::from)));
    }
}
