use outcome_rail::{Outcome, Status};

#[test]
fn outcome_round_trips_through_result() {
    let ok = Outcome::<i32, &str>::ok(42);
    assert_eq!(ok.to_result(), Ok(42));
    assert_eq!(Outcome::from_result(Ok::<i32, &str>(42)), ok);

    let err = Outcome::<i32, &str>::err("boom");
    assert_eq!(err.to_result(), Err("boom"));
    assert_eq!(Outcome::from_result(Err::<i32, &str>("boom")), err);
}

#[test]
fn from_impls_cover_both_directions() {
    let outcome: Outcome<i32, &str> = Ok::<_, &str>(42).into();
    assert!(outcome.is_ok());

    let result: Result<i32, &str> = Outcome::<i32, &str>::err("boom").into();
    assert_eq!(result, Err("boom"));
}

#[test]
fn question_mark_works_at_the_result_boundary() {
    fn parse_doubled(raw: &str) -> Result<i32, core::num::ParseIntError> {
        let outcome = Outcome::from_result(raw.parse::<i32>());
        let n = outcome.map(|n| n * 2).to_result()?;
        Ok(n)
    }

    assert_eq!(parse_doubled("21"), Ok(42));
    assert!(parse_doubled("x").is_err());
}

#[test]
fn status_round_trips_through_unit_result() {
    assert_eq!(Status::<&str>::ok().to_result(), Ok(()));
    assert_eq!(Status::<&str>::err("boom").to_result(), Err("boom"));

    assert!(Status::from_result(Ok::<(), &str>(())).is_ok());
    assert!(Status::from_result(Err::<(), &str>("boom")).is_err());
}

#[test]
fn status_and_unit_outcome_are_interchangeable() {
    let status: Status<&str> = Outcome::<(), &str>::ok(()).into();
    assert!(status.try_ok());

    let outcome: Outcome<(), &str> = Status::<&str>::err("boom").into();
    assert_eq!(outcome.try_err(), Some(&"boom"));

    let back: Status<&str> = outcome.into();
    assert_eq!(back.into_err(), Some("boom"));
}
