use super::*;

#[test]
fn parses_option_letters() {
    assert_eq!("a".parse::<Input>().unwrap(), Input::Select(Label::A));
    assert_eq!(" D\n".parse::<Input>().unwrap(), Input::Select(Label::D));
}

#[test]
fn parses_commands() {
    assert_eq!("r".parse::<Input>().unwrap(), Input::Restart);
    assert_eq!("Restart".parse::<Input>().unwrap(), Input::Restart);
    assert_eq!("q".parse::<Input>().unwrap(), Input::Quit);
    assert_eq!(
        "click 120 175.5".parse::<Input>().unwrap(),
        Input::Click { x: 120.0, y: 175.5 }
    );
}

#[test]
fn rejects_garbage() {
    assert!("".parse::<Input>().is_err());
    assert!("hello".parse::<Input>().is_err());
    assert!("click 10".parse::<Input>().is_err());
    assert!("click ten 10".parse::<Input>().is_err());
    assert!("a b".parse::<Input>().is_err());
}
