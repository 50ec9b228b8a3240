//! End-to-end reasoning tests over a small animal/plant ontology, driving
//! the public `Engine::process` surface exactly as the CLI does.

use owlet_core::{Edge, EdgeType, Engine, QuestionResult};

/// The taxonomy used throughout: organisms split into animals and plants
/// (mutually exclusive), with a handful of named instances and class-level
/// attributes.
fn animal_plant_engine() -> Engine {
    use EdgeType::{HasAttribute, InstanceOf, MutuallyExclusive, SubclassOf};

    let engine = Engine::default();
    engine
        .add_edges(vec![
            Edge::new(SubclassOf, "organism", "entity"),
            Edge::new(SubclassOf, "animal", "organism"),
            Edge::new(SubclassOf, "plant", "organism"),
            Edge::new(SubclassOf, "dog", "animal"),
            Edge::new(SubclassOf, "chicken", "animal"),
            Edge::new(SubclassOf, "mammal", "animal"),
            Edge::new(SubclassOf, "sea animal", "animal"),
            Edge::new(SubclassOf, "whale", "mammal"),
            Edge::new(SubclassOf, "whale", "sea animal"),
            Edge::new(SubclassOf, "killer whale", "whale"),
            Edge::new(SubclassOf, "pufferfish", "sea animal"),
            Edge::new(SubclassOf, "tree", "plant"),
            Edge::new(SubclassOf, "hemlock", "plant"),
            Edge::new(InstanceOf, "Lassie", "dog"),
            Edge::new(InstanceOf, "Uggie", "dog"),
            Edge::new(InstanceOf, "Ginger", "chicken"),
            Edge::new(InstanceOf, "Clifford the Big Red Dog", "animal"),
            Edge::new(InstanceOf, "Luna the Whale", "whale"),
            Edge::new(InstanceOf, "General Sherman", "tree"),
            Edge::new(HasAttribute, "dog", "four-legged"),
            Edge::new(HasAttribute, "mammal", "warm-blooded"),
            Edge::new(HasAttribute, "sea animal", "aquatic"),
            Edge::new(HasAttribute, "hemlock", "poisonous"),
            Edge::new(MutuallyExclusive, "animal", "plant"),
            Edge::new(MutuallyExclusive, "plant", "animal"),
        ])
        .expect("reference ontology loads");
    engine
}

fn assert_answers(engine: &Engine, cases: &[(&str, QuestionResult)]) {
    for (question, expected) in cases {
        let answer = engine.process(question);
        assert_eq!(
            answer.result, *expected,
            "{question} => {} (expected {expected}), explanation: {:?}",
            answer.result, answer.explanation
        );
    }
}

// =============================================================================
// "is H considered to be T?" (attribute questions)
// =============================================================================

#[test]
fn test_attribute_questions() {
    use QuestionResult::{DontKnow, Yes};

    let engine = animal_plant_engine();
    assert_answers(
        &engine,
        &[
            ("is hemlock considered to be poisonous?", Yes),
            ("is dog considered to be four-legged?", Yes),
            // Instances inherit through their class.
            ("is Lassie considered to be four-legged?", Yes),
            ("is Luna the Whale considered to be warm-blooded?", Yes),
            ("is Luna the Whale considered to be aquatic?", Yes),
            // Subclasses inherit from every superclass.
            ("is killer whale considered to be warm-blooded?", Yes),
            ("is pufferfish considered to be aquatic?", Yes),
            // Attributes never climb upward.
            ("is Clifford the Big Red Dog considered to be aquatic?", DontKnow),
            ("is sea animal considered to be poisonous?", DontKnow),
            ("is pufferfish considered to be warm-blooded?", DontKnow),
            ("is Uggie considered to be poisonous?", DontKnow),
            ("is killer whale considered to be four-legged?", DontKnow),
            ("is chicken considered to be four-legged?", DontKnow),
            // An attribute has no attributes of its own.
            ("is poisonous considered to be poisonous?", DontKnow),
            ("is plant considered to be tree?", DontKnow),
        ],
    );
}

#[test]
fn test_attribute_questions_with_unknown_entities() {
    use QuestionResult::DontKnow;

    let engine = animal_plant_engine();
    assert_answers(
        &engine,
        &[
            ("is hemlock considered to be biennial?", DontKnow),
            ("is squirrel considered to be warm-blooded?", DontKnow),
            ("is squirrel considered to be cold-blooded?", DontKnow),
        ],
    );

    let answer = engine.process("is hemlock considered to be biennial?");
    assert_eq!(
        answer.explanation.as_deref(),
        Some("entities not found: biennial")
    );
    assert!((answer.confidence - 0.0).abs() < f32::EPSILON);
}

// =============================================================================
// "is H a T?" / "is H an T?" (instance questions)
// =============================================================================

#[test]
fn test_instance_questions() {
    use QuestionResult::{DontKnow, No, Yes};

    let engine = animal_plant_engine();
    assert_answers(
        &engine,
        &[
            ("is Ginger an animal?", Yes),
            ("is Ginger a animal?", Yes),
            ("is Lassie a dog?", Yes),
            ("is Clifford the Big Red Dog an animal?", Yes),
            ("is Lassie an entity?", Yes),
            // Known only to be an animal; dog membership is unstated.
            ("is Clifford the Big Red Dog a dog?", DontKnow),
            // Instances are not instances of themselves.
            ("is General Sherman a General Sherman?", No),
            ("is entity a entity?", No),
            // Membership in the excluded branch is refuted.
            ("is Lassie a plant?", No),
            ("is General Sherman an animal?", No),
            // No instance evidence at all.
            ("is entity a Lassie?", DontKnow),
            ("is plant a Lassie?", DontKnow),
        ],
    );
}

#[test]
fn test_instance_questions_with_unknown_entities() {
    use QuestionResult::DontKnow;

    let engine = animal_plant_engine();
    assert_answers(
        &engine,
        &[
            ("is Ginger a cat?", DontKnow),
            ("is Terri the squirrel a mammal?", DontKnow),
            ("is Terri the squirrel a goose?", DontKnow),
            ("is Lassie a pet?", DontKnow),
        ],
    );

    let answer = engine.process("is Terri the squirrel a goose?");
    assert_eq!(
        answer.explanation.as_deref(),
        Some("entities not found: Terri the squirrel, goose")
    );
}

// =============================================================================
// "is H a type of T?" (subclass questions)
// =============================================================================

#[test]
fn test_subclass_questions() {
    use QuestionResult::{DontKnow, No, Yes};

    let engine = animal_plant_engine();
    assert_answers(
        &engine,
        &[
            ("is sea animal a type of animal?", Yes),
            ("is killer whale a type of animal?", Yes),
            ("is hemlock a type of organism?", Yes),
            // Every class is a type of itself.
            ("is plant a type of plant?", Yes),
            ("is entity a type of entity?", Yes),
            ("is plant a type of entity?", Yes),
            // Open world: missing edges are not refutations...
            ("is pufferfish a type of mammal?", DontKnow),
            ("is plant a type of tree?", DontKnow),
            // ...unless an exclusion edge is on the path.
            ("is tree a type of animal?", No),
            ("is pufferfish a type of plant?", No),
        ],
    );
}

#[test]
fn test_subclass_questions_with_unknown_entities() {
    use QuestionResult::DontKnow;

    let engine = animal_plant_engine();
    assert_answers(
        &engine,
        &[
            ("is pufferfish a type of fish?", DontKnow),
            ("is amphibian a type of animal?", DontKnow),
            ("is amphibian a type of vertebrates?", DontKnow),
        ],
    );
}

// =============================================================================
// Unparseable input
// =============================================================================

#[test]
fn test_questions_not_in_recognized_format() {
    use QuestionResult::DontKnow;

    let engine = animal_plant_engine();
    for question in [
        "how are pufferfish and fish related?",
        "are pufferfish and fish related?",
        "tell me how pufferfish and fish are related?",
        "is pufferfish an instance of fish?",
    ] {
        let answer = engine.process(question);
        assert_eq!(answer.result, DontKnow, "{question}");
        assert!((answer.confidence - 0.0).abs() < f32::EPSILON);
        assert!(
            answer
                .explanation
                .as_deref()
                .unwrap()
                .contains("unable to parse question"),
            "{question}"
        );
    }
}

// =============================================================================
// Cache behavior through the public surface
// =============================================================================

#[test]
fn test_repeat_question_is_idempotent_and_cached() {
    let engine = animal_plant_engine();

    let first = engine.process("is killer whale considered to be warm-blooded?");
    let second = engine.process("is killer whale considered to be warm-blooded?");

    assert_eq!(first.result, second.result);
    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(second.entities_visited, 0);
    assert!((second.confidence - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_reflexivity_for_every_known_entity() {
    let engine = animal_plant_engine();

    // The quantified invariants: "is X a type of X?" is YES and
    // "is X a X?" is NO for every entity the graph knows.
    for entity in [
        "entity", "organism", "animal", "plant", "dog", "whale", "Lassie", "poisonous",
    ] {
        let subclass = engine.process(&format!("is {entity} a type of {entity}?"));
        assert_eq!(subclass.result, QuestionResult::Yes, "{entity}");

        let instance = engine.process(&format!("is {entity} a {entity}?"));
        assert_eq!(instance.result, QuestionResult::No, "{entity}");
    }
}

// =============================================================================
// A second domain: the instruments-and-groceries ontology
// =============================================================================

#[test]
fn test_instruments_and_groceries() {
    use EdgeType::{HasAttribute, InstanceOf, SubclassOf};
    use QuestionResult::Yes;

    let engine = Engine::default();
    engine
        .add_edges(vec![
            Edge::new(SubclassOf, "piano", "musical instrument"),
            Edge::new(SubclassOf, "baby grand", "piano"),
            Edge::new(SubclassOf, "vodka", "drink"),
            Edge::new(SubclassOf, "cheese", "food"),
            Edge::new(InstanceOf, "my baby grand", "baby grand"),
            Edge::new(InstanceOf, "Smirnoff", "vodka"),
            Edge::new(InstanceOf, "Cheddar", "cheese"),
            Edge::new(HasAttribute, "musical instrument", "playable"),
            Edge::new(HasAttribute, "cheese", "hard"),
        ])
        .unwrap();

    assert_answers(
        &engine,
        &[
            ("is baby grand a type of musical instrument?", Yes),
            ("is Smirnoff a drink?", Yes),
            ("is my baby grand a musical instrument?", Yes),
            ("is Cheddar considered to be hard?", Yes),
            ("is my baby grand considered to be playable?", Yes),
        ],
    );
}

// =============================================================================
// Result serialization at the boundary
// =============================================================================

#[test]
fn test_query_result_serializes_with_wire_spellings() {
    let engine = animal_plant_engine();
    let answer = engine.process("is Lassie a plant?");

    let json = serde_json::to_value(&answer).unwrap();
    assert_eq!(json["result"], "NO");
    assert_eq!(json["cache_hit"], false);
    assert!(json["execution_time_ms"].is_number());
    assert!(json["request_id"].is_string());
}
