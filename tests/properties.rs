// tests/properties.rs
use glam::Vec2;
use lsystem_turtle::{Alphabet, Grammar, RuleSet, TurtleInterpreter, TurtleState, rewrite};
use proptest::prelude::*;

fn alphabet() -> Alphabet {
    Alphabet::standard(25.0f32.to_radians())
}

/// Strings over drawable symbols plus characters the alphabet does not know.
fn turtle_program() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['F', '+', '-', '[', ']', 'X', 'Q']), 0..96)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn rewrite_is_deterministic(axiom in "[XF+\\-\\[\\]]{1,6}", generations in 0usize..4) {
        let grammar = Grammar::new(['X', 'F'], ['+', '-', '[', ']']);
        let rules = RuleSet::new()
            .with_rule('X', "F+[[X]-X]-F[-FX]+X")
            .with_rule('F', "FF");
        let first = rewrite(&grammar, &rules, &axiom, generations);
        let second = rewrite(&grammar, &rules, &axiom, generations);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn segment_count_matches_forward_count(program in turtle_program()) {
        let drawing = TurtleInterpreter::default().interpret(&program, &alphabet()).unwrap();
        let forwards = program.chars().filter(|&c| c == 'F').count();
        prop_assert_eq!(drawing.len(), forwards);
    }

    #[test]
    fn bounds_contain_every_endpoint(program in turtle_program()) {
        let drawing = TurtleInterpreter::default().interpret(&program, &alphabet()).unwrap();
        for segment in &drawing.segments {
            prop_assert!(drawing.bounds.contains(segment.start));
            prop_assert!(drawing.bounds.contains(segment.end));
        }
    }

    #[test]
    fn balanced_branch_does_not_move_trunk(branch in turtle_program()) {
        let clean: String = branch.chars().filter(|c| !matches!(c, '[' | ']')).collect();
        let program = format!("F[{clean}]F");
        let drawing = TurtleInterpreter::default().interpret(&program, &alphabet()).unwrap();
        let last = drawing.segments.last().copied().unwrap();
        prop_assert_eq!(last.start, Vec2::Y);
        prop_assert_eq!(last.end, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn opposite_turns_cancel(theta in -10.0f32..10.0, start in 0.0f32..std::f32::consts::TAU) {
        let mut turtle = TurtleState { position: Vec2::ZERO, heading: Vec2::from_angle(start) };
        let original = turtle.heading;
        turtle.turn(theta);
        turtle.turn(-theta);
        prop_assert!(turtle.heading.abs_diff_eq(original, 1e-5));
    }
}
