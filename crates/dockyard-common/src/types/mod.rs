mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NodeId;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect::new(10.0, 20.0, 800.0, 600.0);
        let r2 = r;
        assert_eq!(r, r2);
        assert_eq!(r.right(), 810.0);
        assert_eq!(r.bottom(), 620.0);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(99.9, 49.9)));
        assert!(!r.contains(Point::new(100.0, 10.0)));
        assert!(!r.contains(Point::new(10.0, 50.0)));
        assert!(!r.contains(Point::new(-1.0, 10.0)));
    }

    #[test]
    fn rect_side_slices() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(r.side_slice(Side::Left, 0.5), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            r.side_slice(Side::Right, 0.25),
            Rect::new(150.0, 0.0, 50.0, 100.0)
        );
        assert_eq!(r.side_slice(Side::Top, 0.5), Rect::new(0.0, 0.0, 200.0, 50.0));
        assert_eq!(
            r.side_slice(Side::Bottom, 0.5),
            Rect::new(0.0, 50.0, 200.0, 50.0)
        );
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(5.0, 5.0, 10.0, 10.0).translate(3.0, -2.0);
        assert_eq!(r, Rect::new(8.0, 3.0, 10.0, 10.0));
    }

    #[test]
    fn side_orientation_and_order() {
        assert_eq!(Side::Left.orientation(), Orientation::Horizontal);
        assert_eq!(Side::Bottom.orientation(), Orientation::Vertical);
        assert!(Side::Top.is_leading());
        assert!(!Side::Right.is_leading());
        for (i, side) in Side::ALL.into_iter().enumerate() {
            assert_eq!(side.index(), i);
            assert_eq!(Side::parse(side.as_str()), Some(side));
        }
        assert_eq!(Side::parse("left"), None);
    }

    #[test]
    fn orientation_parse_and_flip() {
        assert_eq!(Orientation::parse("Vertical"), Some(Orientation::Vertical));
        assert_eq!(Orientation::parse("vertical"), None);
        assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.to_string(), "Vertical");
    }

    #[test]
    fn host_id_display() {
        assert_eq!(HostId::Main.to_string(), "main");
        assert_eq!(HostId::Floating(NodeId(4)).to_string(), "floating-4");
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        assert!((a.distance_to(Point::new(3.0, 4.0)) - 5.0).abs() < f64::EPSILON);
    }
}
