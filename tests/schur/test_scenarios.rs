use num_traits::Zero;
use schur_tableaux::prelude::*;

fn x(i: usize) -> Polynomial {
    Polynomial::var(i - 1)
}

fn int(n: i64) -> Polynomial {
    Polynomial::from_integer(n)
}

#[test]
fn two_one_in_three_variables() {
    let (x1, x2, x3) = (x(1), x(2), x(3));
    let expected = [
        &x1 * &x2.pow(2),
        &x2 * &x1.pow(2),
        &x1 * &x3.pow(2),
        &x3 * &x1.pow(2),
        &x2 * &x3.pow(2),
        &x3 * &x2.pow(2),
        &int(2) * &(&(&x1 * &x2) * &x3),
    ]
    .into_iter()
    .sum::<Polynomial>();

    let s = schur_by_enumeration(&Partition::from([2, 1]), 3);
    assert_eq!(s, expected);
    assert_eq!(
        s.to_string(),
        "x1^2*x2 + x1^2*x3 + x1*x2^2 + 2*x1*x2*x3 + x1*x3^2 + x2^2*x3 + x2*x3^2"
    );
    assert!(polynomials_equal(&schur_by_weyl(&Partition::from([2, 1]), 3).unwrap(), &expected));
}

#[test]
fn two_one_one_in_three_variables() {
    let (x1, x2, x3) = (x(1), x(2), x(3));
    let expected = &(&(&x1 * &x2) * &x3) * &(&(&x1 + &x2) + &x3);

    let partition = Partition::from([2, 1, 1]);
    assert_eq!(schur_by_enumeration(&partition, 3), expected);
    assert!(polynomials_equal(
        &schur_by_enumeration(&partition, 3),
        &schur_by_weyl(&partition, 3).unwrap()
    ));
}

#[test]
fn two_two_zero_in_three_variables() {
    let (x1, x2, x3) = (x(1), x(2), x(3));
    let x123 = &(&x1 * &x2) * &x3;
    let expected = [
        (&x1 * &x2).pow(2),
        (&x1 * &x3).pow(2),
        (&x2 * &x3).pow(2),
        &x123 * &x1,
        &x123 * &x2,
        &x123 * &x3,
    ]
    .into_iter()
    .sum::<Polynomial>();

    let partition = Partition::from([2, 2, 0]);
    assert_eq!(partition.len(), 2);
    assert_eq!(schur_by_enumeration(&partition, 3), expected);
    assert_eq!(schur_by_weyl(&partition, 3).unwrap(), expected);
}

#[test]
fn four_two_one_one_in_four_variables() {
    let partition = Partition::from([4, 2, 1, 1]);
    let enumerated = schur_by_enumeration(&partition, 4);
    let weyl = schur_by_weyl(&partition, 4).unwrap();
    assert!(polynomials_equal(&enumerated, &weyl));

    // (x1 x2 x3 x4) * s_(3,1)(x1, .., x4); s_(3,1) has 45 tableaux in four labels
    let count = enumerated
        .terms()
        .fold(Coefficient::zero(), |acc, (_, c)| acc + c);
    assert_eq!(count, Coefficient::from_integer(num_bigint::BigInt::from(45)));
    assert_eq!(cross_validate(&partition, 4).unwrap(), enumerated);
}

#[test]
fn mismatch_error_names_both_results() {
    let err = SchurError::CrossValidationMismatch {
        partition: vec![1],
        n: 1,
        enumerated: Box::new(x(1)),
        weyl: Box::new(int(0)),
    };
    let message = err.to_string();
    assert!(message.contains("enumeration: x1"));
    assert!(message.contains("weyl: 0"));
}
