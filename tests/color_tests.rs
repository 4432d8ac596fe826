use shiftgantt::render::colors::ColorMap;

fn resources() -> Vec<String> {
    vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()]
}

#[test]
fn test_same_seed_gives_the_same_palette() {
    let a = ColorMap::assign(&resources(), 7);
    let b = ColorMap::assign(&resources(), 7);

    for name in resources() {
        assert_eq!(a.color_for(&name), b.color_for(&name));
    }
}

#[test]
fn test_different_seeds_rotate_the_palette() {
    let a = ColorMap::assign(&resources(), 0);
    let b = ColorMap::assign(&resources(), 90);

    assert_ne!(a.color_for("Alice"), b.color_for("Alice"));
}

#[test]
fn test_distinct_resources_get_distinct_colors() {
    let map = ColorMap::assign(&resources(), 0);

    let alice = map.color_for("Alice");
    let bob = map.color_for("Bob");
    let carol = map.color_for("Carol");

    assert_ne!(alice, bob);
    assert_ne!(bob, carol);
    assert_ne!(alice, carol);
    assert!(alice.starts_with("rgb("));
}

#[test]
fn test_unknown_resource_falls_back_to_grey() {
    let map = ColorMap::assign(&resources(), 0);
    assert_eq!(map.color_for("Nobody"), "rgb(128, 128, 128)");
}
