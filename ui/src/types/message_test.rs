use super::*;

#[test]
fn kind_classes_should_be_distinct() {
    let classes = [MessageType::Info, MessageType::Success, MessageType::Error]
        .map(|kind| kind.class());

    assert_eq!(["message-info", "message-success", "message-error"], classes);
}
