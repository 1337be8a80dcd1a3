use schur_tableaux::error::SchurError;
use schur_tableaux::tableau::*;

#[test]
fn rendering_of_first_tableaux() {
    let tableaux = enumerate_tableaux(&Shape::new(vec![2, 1]), 3);
    let rendered = tableaux.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(
        rendered,
        vec!["1,1\n2", "1,1\n3", "1,2\n2", "1,2\n3", "1,3\n2", "1,3\n3", "2,2\n3", "2,3\n3"]
    );
}

#[test]
fn diagram_round_trip_through_tableau() {
    let tableau = enumerate_tableaux(&Shape::new(vec![3, 1]), 2).remove(0);
    let diagram = tableau.to_diagram();
    assert_eq!(diagram.to_string(), tableau.to_string());
    assert_eq!(diagram.to_tableau(), Some(tableau));
}

#[test]
fn partially_labelled_diagram() {
    let mut diagram = Diagram::new(Shape::new(vec![2, 2, 1]));
    diagram.set(Cell::new(0, 0), 1).unwrap();
    diagram.set(Cell::new(2, 0), 3).unwrap();
    assert_eq!(diagram.to_string(), format!("1,{UNSET}\n{UNSET},{UNSET}\n3"));
}

#[test]
fn mismatched_labelling_is_rejected() {
    let shape = Shape::new(vec![2, 1]);
    let mut diagram = Diagram::new(shape.clone());

    let too_many_rows = vec![vec![1, 1], vec![2], vec![3]];
    assert!(matches!(
        diagram.label(&too_many_rows),
        Err(SchurError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        Tableau::from_rows(shape, vec![vec![1], vec![2, 3]]),
        Err(SchurError::ShapeMismatch { .. })
    ));
}
