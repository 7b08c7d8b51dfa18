//! Integration tests for world declarations

use sepro_language::{SlotPath, WorldBinding, WorldObject, compile};

#[test]
fn bare_world() {
    let model = compile("WORLD main").unwrap();
    let world = model.get_world("main").unwrap();
    assert!(world.root_name.is_none());
    assert!(world.objects.is_empty());
    assert!(world.bindings.is_empty());
}

#[test]
fn world_with_all_clauses() {
    let source = "
        CONCEPT link SLOT next, prev
        WORLD chain
            ROOT head
            OBJECT link AS head, link AS tail, link
            BIND head.next TO tail.prev, tail.prev TO head.next
    ";
    let model = compile(source).unwrap();
    assert_eq!(model.concepts.len(), 1);

    let world = &model.worlds[0];
    assert_eq!(world.name, "chain");
    assert_eq!(world.root_name.as_deref(), Some("head"));
    assert_eq!(
        world.objects,
        [
            WorldObject {
                concept_name: "link".into(),
                alias: Some("head".into()),
            },
            WorldObject {
                concept_name: "link".into(),
                alias: Some("tail".into()),
            },
            WorldObject {
                concept_name: "link".into(),
                alias: None,
            },
        ]
    );
    assert_eq!(
        world.bindings[0],
        WorldBinding {
            from: SlotPath::new("head", "next"),
            to: SlotPath::new("tail", "prev"),
        }
    );
    assert_eq!(world.bindings[1].from.to_string(), "tail.prev");
}

#[test]
fn worlds_in_declaration_order() {
    let model = compile("WORLD a WORLD b ROOT x WORLD c").unwrap();
    let names: Vec<&str> = model.worlds.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn world_followed_by_rule() {
    let model = compile("WORLD w ROOT r WHERE ROOT ready DO NOTHING").unwrap();
    assert_eq!(model.worlds[0].root_name.as_deref(), Some("r"));
    assert!(model.actuators[0].is_root);
}

#[test]
fn world_requires_name() {
    let err = compile("WORLD").unwrap_err();
    assert!(err.message().contains("world name"));
}

#[test]
fn world_object_alias_required_after_as() {
    let err = compile("WORLD w OBJECT link AS").unwrap_err();
    assert!(err.message().contains("object alias"));
}

#[test]
fn world_binding_requires_to() {
    let err = compile("WORLD w BIND a.b c.d").unwrap_err();
    assert!(err.message().contains("expected TO"));
    assert!(err.message().contains("'c'"));
}

#[test]
fn world_repeated_bind_clause() {
    let err = compile("WORLD w BIND a.b TO c.d BIND e.f TO g.h").unwrap_err();
    assert!(err.message().contains("duplicate BIND clause in world 'w'"));
}
