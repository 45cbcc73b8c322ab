use outcome_rail::{outcome, status, Outcome, Status};

#[test]
fn outcome_macro_wraps_a_result_expression() {
    let parsed = outcome!("42".parse::<i32>());
    assert_eq!(parsed.try_ok(), Some(&42));

    let failed = outcome!("x".parse::<i32>());
    assert!(failed.is_err());
}

#[test]
fn outcome_macro_accepts_a_block() {
    let wrapped: Outcome<i32, &str> = outcome!({
        let n = 21;
        Ok::<_, &str>(n * 2)
    });
    assert_eq!(wrapped.into_ok(), Some(42));
}

#[test]
fn status_macro_wraps_a_unit_result() {
    fn ensure_positive(n: i32) -> Result<(), &'static str> {
        if n > 0 {
            Ok(())
        } else {
            Err("not positive")
        }
    }

    let ok: Status<&str> = status!(ensure_positive(1));
    assert!(ok.try_ok());

    let err = status!(ensure_positive(-1));
    assert_eq!(err.into_err(), Some("not positive"));
}
