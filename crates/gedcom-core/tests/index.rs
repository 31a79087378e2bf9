//! Tests for the name and surname indices.

use gedcom_core::{RecordTree, Resolver, name_index, surname_index, top_surnames};
use gedcom_model::ResolveOptions;
use gedcom_model::builder::{IndividualBuilder, TreeBuilder};

fn tree() -> RecordTree {
    RecordTree::new(
        TreeBuilder::new()
            .individual(
                IndividualBuilder::new("@I1@")
                    .name("william /Smith/")
                    .event("BIRT", Some("1850"))
                    .event("DEAT", None),
            )
            .individual(
                IndividualBuilder::new("@I2@")
                    .name("Ada /Byron/")
                    .event("BIRT", Some("10 DEC 1815")),
            )
            .individual(
                IndividualBuilder::new("@I3@")
                    .name("Living /Smith/")
                    .event("BIRT", Some("1990")),
            )
            .individual(
                IndividualBuilder::new("@I4@")
                    .name("Anna /Smith/")
                    .event("DEAT", Some("1901")),
            )
            .individual(
                IndividualBuilder::new("@J5@")
                    .name("Famous /Van Dyke/")
                    .event("BIRT", Some("1985"))
                    .labelled("@L1@"),
            )
            .individual(IndividualBuilder::new("@I6@").name("Nobody").event("DEAT", None))
            .label("@L1@", "Noteworthy")
            .build(),
    )
}

#[test]
fn name_index_lists_disclosed_people_sorted() {
    let tree = tree();
    let resolver =
        Resolver::new(&tree).with_options(ResolveOptions::new().with_reference_year(2024));
    let people = resolver.people();

    insta::assert_json_snapshot!(name_index(&people), @r#"
    [
      {
        "name": "Ada Byron",
        "birth": "10 DEC 1815",
        "url": "/people/I/I2"
      },
      {
        "name": "Anna Smith",
        "birth": null,
        "url": "/people/I/I4"
      },
      {
        "name": "Famous Van Dyke",
        "birth": "1985",
        "url": "/people/J/J5"
      },
      {
        "name": "Nobody",
        "birth": null,
        "url": "/people/I/I6"
      },
      {
        "name": "william Smith",
        "birth": "1850",
        "url": "/people/I/I1"
      }
    ]
    "#);
}

#[test]
fn surname_index_groups_disclosed_people() {
    let tree = tree();
    let resolver =
        Resolver::new(&tree).with_options(ResolveOptions::new().with_reference_year(2024));
    let people = resolver.people();

    let groups = surname_index(&people);
    let surnames: Vec<(&str, &str, usize)> = groups
        .iter()
        .map(|group| (group.surname.as_str(), group.slug.as_str(), group.len()))
        .collect();
    assert_eq!(
        surnames,
        vec![
            ("Byron", "byron", 1),
            ("Smith", "smith", 2),
            ("Van Dyke", "van-dyke", 1),
        ]
    );

    let smiths: Vec<&str> = groups[1]
        .entries
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(smiths, vec!["I4", "I1"]);

    let top: Vec<&str> = top_surnames(&groups, 2)
        .into_iter()
        .map(|group| group.surname.as_str())
        .collect();
    assert_eq!(top, vec!["Smith", "Byron"]);
}
