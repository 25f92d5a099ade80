use std::collections::BTreeSet;

use crate::io::OutputWriter;
use crate::models::constants::GallowsStage;

pub struct WordPresenter;

impl WordPresenter {
    /// Print the reveal string, e.g. `_ _ A _ C E`.
    pub fn show(display: &str, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(display);
    }

    pub fn show_guessed(guessed: &BTreeSet<char>, output: &mut dyn OutputWriter) {
        let letters: Vec<String> = guessed.iter().map(|c| c.to_string()).collect();
        output.writeln(&format!("GUESSED SO FAR: {}", letters.join(" ")));
    }
}

pub struct GallowsPresenter;

impl GallowsPresenter {
    /// Draw the gallows at `stage`: the stage caption plus the picture
    /// cumulative to that stage. Called exactly once per recorded miss,
    /// with strictly increasing stages.
    pub fn show_stage(stage: GallowsStage, output: &mut dyn OutputWriter) {
        output.writeln(&format!("WRONG! {}", stage.caption()));
        for line in Self::picture(stage) {
            output.writeln(line.trim_end());
        }
    }

    /// The ASCII gallows with every piece up to and including `stage`.
    /// Pieces appear in stage order: stand, brace, noose, then the figure.
    fn picture(stage: GallowsStage) -> [String; 7] {
        let s = stage.index();
        let pick = |at: u32, piece: char| if s >= at { piece } else { ' ' };

        let upright = pick(2, '|');
        let brace = pick(4, '/');
        let rope = pick(5, '|');
        let head = pick(6, 'O');
        let body = pick(7, '|');
        let left_arm = pick(8, '/');
        let right_arm = pick(9, '\\');
        let left_leg = pick(10, '/');
        let right_leg = pick(11, '\\');

        [
            if s >= 3 {
                "   +--------+".to_string()
            } else {
                format!("   {}", upright)
            },
            format!("   {}{}       {}", upright, brace, rope),
            format!("   {}        {}", upright, head),
            format!("   {}       {}{}{}", upright, left_arm, body, right_arm),
            format!("   {}       {} {}", upright, left_leg, right_leg),
            format!("   {}", upright),
            if s >= 1 {
                " ============".to_string()
            } else {
                String::new()
            },
        ]
    }
}

pub struct OutcomePresenter;

impl OutcomePresenter {
    pub fn show_win(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("WELL DONE! YOU GUESSED THE WORD. YOU WIN!");
    }

    pub fn show_loss(secret: &str, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*** THE GALLOWS ARE COMPLETE ***");
        output.writeln(&format!("YOU LOST! THE WORD WAS: {}.", secret));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::constants::MAX_STAGES;

    #[test]
    fn every_stage_has_a_caption_and_draws() {
        for stage in GallowsStage::ALL {
            let mut output = MockOutput::new();
            GallowsPresenter::show_stage(stage, &mut output);
            assert!(output.contains(stage.caption()));
            // Caption line plus the 7 picture rows
            assert_eq!(output.messages.len(), 8);
        }
    }

    #[test]
    fn stage_indices_map_one_to_one() {
        assert_eq!(GallowsStage::from_index(0), None);
        assert_eq!(GallowsStage::from_index(MAX_STAGES + 1), None);
        for (i, stage) in GallowsStage::ALL.iter().enumerate() {
            assert_eq!(GallowsStage::from_index(i as u32 + 1), Some(*stage));
            assert_eq!(stage.index(), i as u32 + 1);
        }
    }

    #[test]
    fn final_stage_shows_the_whole_figure() {
        let mut output = MockOutput::new();
        GallowsPresenter::show_stage(GallowsStage::RightLeg, &mut output);
        assert!(output.contains("O"));
        assert!(output.contains("/|\\"));
        assert!(output.contains("/ \\"));
    }

    #[test]
    fn first_stage_is_just_the_base() {
        let mut output = MockOutput::new();
        GallowsPresenter::show_stage(GallowsStage::StandBottom, &mut output);
        assert!(output.contains("============"));
        // The picture rows (everything after the caption) hold no figure yet
        let picture = &output.messages[1..];
        assert!(picture.iter().all(|row| !row.contains('O') && !row.contains('|')));
    }

    #[test]
    fn loss_message_names_the_word() {
        let mut output = MockOutput::new();
        OutcomePresenter::show_loss("NEW ZEALAND", &mut output);
        assert!(output.contains("NEW ZEALAND"));
    }
}
