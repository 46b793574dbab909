#[cfg(test)]
mod tests {
    use not251::commands::{create_registry, CommandContext, CommandResult};
    use not251::types::{
        auto_mode_params, auto_voicing_params, chord, scale, transpose_between, ChordParams,
        ScaleParams,
    };

    #[test]
    fn test_scale_scenarios() {
        assert_eq!(scale(&ScaleParams::major()).data(), &[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(
            scale(&ScaleParams::major().with_root(2)).data(),
            &[2, 4, 6, 7, 9, 11, 13]
        );
        // natural minor is the sixth mode
        assert_eq!(
            scale(&ScaleParams::major().with_mode(5)).data(),
            &[0, 2, 3, 5, 7, 8, 10]
        );
    }

    #[test]
    fn test_chord_scenarios() {
        let major = scale(&ScaleParams::major());
        assert_eq!(chord(&ChordParams::triad(major.clone())).unwrap().data(), &[60, 64, 67]);
        assert_eq!(
            chord(&ChordParams::triad(major.clone()).with_root(2)).unwrap().data(),
            &[62, 66, 69]
        );

        let minor = scale(&ScaleParams::major().with_mode(5));
        assert_eq!(chord(&ChordParams::triad(minor)).unwrap().data(), &[60, 63, 67]);
    }

    #[test]
    fn test_dominant_to_tonic_voicing() {
        let major = scale(&ScaleParams::major());
        let tonic = ChordParams::triad(major.clone()).with_octave(0);
        let dominant = ChordParams::triad(major).with_degree(4).with_octave(0);

        let voiced = auto_voicing_params(&tonic, &dominant).unwrap();
        assert_eq!(voiced.position, -2);
        assert_eq!(chord(&voiced).unwrap().data(), &[-1, 2, 7]);
    }

    #[test]
    fn test_mode_for_note_set() {
        let params = auto_mode_params(&ScaleParams::major(), &[61]);
        assert_eq!(params.mode, 2);
        assert_eq!(scale(&params).data(), &[0, 1, 3, 5, 7, 8, 10]);
    }

    #[test]
    fn test_transpose_into_minor() {
        let major = scale(&ScaleParams::major());
        let minor = scale(&ScaleParams::major().with_mode(5));
        let moved = transpose_between(&major, &minor, 0, 0, &[60, 62, 64, 65, 67]);
        assert_eq!(moved.notes, vec![60, 62, 63, 65, 67]);
    }

    #[test]
    fn test_command_session() {
        let registry = create_registry();
        let mut ctx = CommandContext::new();

        assert!(matches!(
            registry.execute("scale root 2", &mut ctx),
            CommandResult::Message(_)
        ));
        assert!(matches!(registry.execute("mode 63", &mut ctx), CommandResult::Message(_)));
        assert_eq!(ctx.scale.mode, 2);
        assert_eq!(ctx.current_scale().data(), &[2, 3, 5, 7, 9, 10, 12]);

        assert!(matches!(registry.execute("chord x", &mut ctx), CommandResult::Error(_)));
        assert_eq!(registry.execute("play", &mut ctx), CommandResult::NotACommand);
        assert_eq!(registry.execute("exit", &mut ctx), CommandResult::Exit);
    }
}
