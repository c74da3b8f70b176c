//! Integration tests for the pseudo-map
//!
//! Tests marker layout and the zoom/pan state machine

use wukirtech::map::{
    MapPoint, MapViewState, PAN_LIMIT, ZOOM_MAX, ZOOM_MIN, layout_markers, marker_position,
};
use wukirtech::types::Destination;

fn named(names: &[&str]) -> Vec<Destination> {
    names
        .iter()
        .map(|name| Destination {
            id: name.to_lowercase(),
            name: name.to_string(),
            ..Default::default()
        })
        .collect()
}

mod layout_tests {
    use super::*;

    #[test]
    fn test_single_marker_sits_right_of_centre() {
        let pos = marker_position(0, 1);
        assert!((pos.left - 80.0).abs() < 1e-9);
        assert!((pos.top - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_is_pure() {
        let list = named(&["Nglinggo", "Giriloyo", "Becici", "Imogiri", "Mangunan"]);
        let first = layout_markers(&list)
            .into_iter()
            .map(|(_, pos)| pos)
            .collect::<Vec<_>>();
        let second = layout_markers(&list)
            .into_iter()
            .map(|(_, pos)| pos)
            .collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_depends_on_order() {
        let forward = named(&["Nglinggo", "Giriloyo", "Becici"]);
        let reversed = named(&["Becici", "Giriloyo", "Nglinggo"]);

        let position_of = |list: &[Destination], name: &str| {
            layout_markers(list)
                .into_iter()
                .find(|(d, _)| d.name == name)
                .map(|(_, pos)| pos)
                .expect("marker")
        };
        assert_ne!(
            position_of(&forward, "Nglinggo"),
            position_of(&reversed, "Nglinggo")
        );
    }

    #[test]
    fn test_rings_cycle_every_three_markers() {
        let count = 6;
        let radius = |index: usize| {
            let pos = marker_position(index, count);
            ((pos.left - 50.0).powi(2) + (pos.top - 50.0).powi(2)).sqrt()
        };
        assert!((radius(0) - 30.0).abs() < 1e-9);
        assert!((radius(1) - 45.0).abs() < 1e-9);
        assert!((radius(2) - 60.0).abs() < 1e-9);
        assert!((radius(3) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_list_has_no_markers() {
        assert!(layout_markers(&[]).is_empty());
    }
}

mod view_state_tests {
    use super::*;

    #[test]
    fn test_zoom_in_caps_at_max() {
        let mut view = MapViewState::default();
        for _ in 0..20 {
            view.zoom_in();
        }
        assert_eq!(view.zoom(), ZOOM_MAX);
    }

    #[test]
    fn test_zoom_out_caps_at_min() {
        let mut view = MapViewState::default();
        for _ in 0..20 {
            view.zoom_out();
        }
        assert_eq!(view.zoom(), ZOOM_MIN);
    }

    #[test]
    fn test_drag_is_bounded() {
        let mut view = MapViewState::default();
        view.pointer_down(MapPoint::new(0.0, 0.0));
        view.pointer_move(MapPoint::new(500.0, -500.0));
        assert_eq!(view.position(), MapPoint::new(PAN_LIMIT, -PAN_LIMIT));
        assert!(view.is_dragging());
    }

    #[test]
    fn test_drag_follows_pointer_delta() {
        let mut view = MapViewState::default();
        view.pointer_down(MapPoint::new(200.0, 150.0));
        view.pointer_move(MapPoint::new(230.0, 140.0));
        assert_eq!(view.position(), MapPoint::new(30.0, -10.0));

        view.pointer_up();
        // A new drag continues from where the last one ended
        view.pointer_down(MapPoint::new(0.0, 0.0));
        view.pointer_move(MapPoint::new(10.0, 10.0));
        assert_eq!(view.position(), MapPoint::new(40.0, 0.0));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut view = MapViewState::default();
        view.pointer_move(MapPoint::new(50.0, 50.0));
        assert_eq!(view.position(), MapPoint::ORIGIN);
    }

    #[test]
    fn test_leaving_the_map_ends_the_drag() {
        let mut view = MapViewState::default();
        view.pointer_down(MapPoint::new(0.0, 0.0));
        view.pointer_leave();
        view.pointer_move(MapPoint::new(50.0, 50.0));
        assert!(!view.is_dragging());
        assert_eq!(view.position(), MapPoint::ORIGIN);
    }

    #[test]
    fn test_zooming_out_pulls_position_inside_the_limit() {
        let mut view = MapViewState::default();
        view.pointer_down(MapPoint::new(0.0, 0.0));
        view.pointer_move(MapPoint::new(100.0, 0.0));
        view.pointer_up();

        view.zoom_out();
        let limit = PAN_LIMIT * view.zoom();
        assert!(view.position().x <= limit + 1e-9);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut view = MapViewState::default();
        view.zoom_in();
        view.pointer_down(MapPoint::new(0.0, 0.0));
        view.pointer_move(MapPoint::new(40.0, 40.0));
        view.pointer_up();

        view.reset();
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.position(), MapPoint::ORIGIN);
    }
}
