//! Message and response specification parameters.
//!
//! Message groups arrive as JSON-valued parameters and are converted into
//! the SDK's message shapes. A response specification is only built when at
//! least one of its parameters was bound, so untouched response slots stay
//! out of the request entirely.

use aws_sdk_lexmodelsv2::types::{
    Button, CustomPayload, ImageResponseCard, Message, MessageGroup, PlainTextMessage,
    ResponseSpecification, SsmlMessage,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{Error, Result};

/// One message variant. Exactly one of the four payload kinds must be set.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MessageSpec {
    /// Plain text shown or read to the user
    #[serde(default)]
    pub plain_text: Option<String>,
    /// Custom payload forwarded verbatim to the client application
    #[serde(default)]
    pub custom_payload: Option<String>,
    /// SSML-marked-up message for speech output
    #[serde(default)]
    pub ssml: Option<String>,
    /// Card with a title, an image and response buttons
    #[serde(default)]
    #[validate(nested)]
    pub image_response_card: Option<ImageResponseCardSpec>,
}

/// Card presented on platforms that support rich responses.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ImageResponseCardSpec {
    /// Card title
    #[validate(length(min = 1, max = 250))]
    pub title: String,
    /// Subtitle prompting the user to select a button
    #[serde(default)]
    #[validate(length(min = 1, max = 250))]
    pub subtitle: Option<String>,
    /// URL of the image shown on the card
    #[serde(default)]
    #[validate(length(min = 1, max = 250))]
    pub image_url: Option<String>,
    /// Buttons to display, in display order
    #[serde(default)]
    #[validate(nested)]
    pub buttons: Option<Vec<ButtonSpec>>,
}

/// A button on an image response card.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ButtonSpec {
    /// Label shown to the user
    #[validate(length(min = 1, max = 50))]
    pub text: String,
    /// Value sent to the bot when the button is selected
    #[validate(length(min = 1, max = 50))]
    pub value: String,
}

/// A message plus the variations Lex may pick from.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MessageGroupSpec {
    /// Primary message
    #[validate(nested)]
    pub message: MessageSpec,
    /// Alternative messages with the same meaning
    #[serde(default)]
    #[validate(nested)]
    pub variations: Option<Vec<MessageSpec>>,
}

/// A full response specification supplied as one JSON object.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ResponseSpec {
    /// Message groups, at least one
    #[validate(length(min = 1, max = 5), nested)]
    pub message_groups: Vec<MessageGroupSpec>,
    /// Whether the user can interrupt the response
    #[serde(default)]
    pub allow_interrupt: Option<bool>,
}

impl MessageSpec {
    /// Convert into the SDK message shape.
    pub fn into_message(self) -> Result<Message> {
        let bound = [
            self.plain_text.is_some(),
            self.custom_payload.is_some(),
            self.ssml.is_some(),
            self.image_response_card.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        if bound != 1 {
            return Err(Error::Validation(
                "a message must set exactly one of plain_text, custom_payload, ssml, or image_response_card"
                    .to_string(),
            ));
        }

        let mut builder = Message::builder();
        if let Some(text) = self.plain_text {
            builder =
                builder.plain_text_message(PlainTextMessage::builder().value(text).build()?);
        }
        if let Some(payload) = self.custom_payload {
            builder = builder.custom_payload(CustomPayload::builder().value(payload).build()?);
        }
        if let Some(ssml) = self.ssml {
            builder = builder.ssml_message(SsmlMessage::builder().value(ssml).build()?);
        }
        if let Some(card) = self.image_response_card {
            builder = builder.image_response_card(card.into_card()?);
        }
        Ok(builder.build())
    }
}

impl ImageResponseCardSpec {
    fn into_card(self) -> Result<ImageResponseCard> {
        let buttons = self
            .buttons
            .map(|buttons| {
                buttons
                    .into_iter()
                    .map(|b| Button::builder().text(b.text).value(b.value).build())
                    .collect::<std::result::Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(ImageResponseCard::builder()
            .title(self.title)
            .set_subtitle(self.subtitle)
            .set_image_url(self.image_url)
            .set_buttons(buttons)
            .build()?)
    }
}

impl MessageGroupSpec {
    /// Convert into the SDK message group shape.
    pub fn into_message_group(self) -> Result<MessageGroup> {
        let variations = self
            .variations
            .map(|variations| {
                variations
                    .into_iter()
                    .map(MessageSpec::into_message)
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;
        Ok(MessageGroup::builder()
            .message(self.message.into_message()?)
            .set_variations(variations)
            .build())
    }
}

impl ResponseSpec {
    /// Convert into the SDK response specification.
    pub fn into_response(self) -> Result<ResponseSpecification> {
        Ok(ResponseSpecification::builder()
            .set_message_groups(Some(message_groups(self.message_groups)?))
            .set_allow_interrupt(self.allow_interrupt)
            .build()?)
    }
}

/// Convert a list of group specs into SDK message groups.
pub fn message_groups(specs: Vec<MessageGroupSpec>) -> Result<Vec<MessageGroup>> {
    specs
        .into_iter()
        .map(MessageGroupSpec::into_message_group)
        .collect()
}

/// Build a response specification when any of its parameters were bound.
///
/// Returns `None` when neither parameter was given, so the response slot is
/// omitted from the request instead of being sent empty.
pub fn response_specification(
    groups: Option<Vec<MessageGroupSpec>>,
    allow_interrupt: Option<bool>,
) -> Result<Option<ResponseSpecification>> {
    if groups.is_none() && allow_interrupt.is_none() {
        return Ok(None);
    }
    let groups = groups.map(message_groups).transpose()?;
    let spec = ResponseSpecification::builder()
        .set_message_groups(groups)
        .set_allow_interrupt(allow_interrupt)
        .build()?;
    Ok(Some(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::parse_spec_list;

    fn plain_group(text: &str) -> MessageGroupSpec {
        MessageGroupSpec {
            message: MessageSpec {
                plain_text: Some(text.to_string()),
                custom_payload: None,
                ssml: None,
                image_response_card: None,
            },
            variations: None,
        }
    }

    #[test]
    fn test_plain_text_message() {
        let message = plain_group("What city?").message.into_message().unwrap();
        assert_eq!(
            message.plain_text_message().unwrap().value(),
            "What city?"
        );
        assert!(message.ssml_message().is_none());
    }

    #[test]
    fn test_message_requires_exactly_one_variant() {
        let empty = MessageSpec {
            plain_text: None,
            custom_payload: None,
            ssml: None,
            image_response_card: None,
        };
        assert!(matches!(empty.into_message(), Err(Error::Validation(_))));

        let two = MessageSpec {
            plain_text: Some("hi".to_string()),
            custom_payload: None,
            ssml: Some("<speak>hi</speak>".to_string()),
            image_response_card: None,
        };
        assert!(matches!(two.into_message(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_image_response_card_with_buttons() {
        let raw = r#"[{
            "message": {
                "image_response_card": {
                    "title": "Pick a city",
                    "subtitle": "Where to?",
                    "buttons": [
                        {"text": "Seattle", "value": "SEA"},
                        {"text": "Portland", "value": "PDX"}
                    ]
                }
            }
        }]"#;
        let specs: Vec<MessageGroupSpec> = parse_spec_list(raw).unwrap();
        let groups = message_groups(specs).unwrap();
        let card = groups[0].message().image_response_card().unwrap();
        assert_eq!(card.title(), "Pick a city");
        assert_eq!(card.buttons().len(), 2);
        assert_eq!(card.buttons()[0].value(), "SEA");
    }

    #[test]
    fn test_empty_button_text_rejected() {
        let raw = r#"[{
            "message": {
                "image_response_card": {
                    "title": "Pick",
                    "buttons": [{"text": "", "value": "X"}]
                }
            }
        }]"#;
        let result: Result<Vec<MessageGroupSpec>> = parse_spec_list(raw);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_response_specification_unbound_is_none() {
        assert!(response_specification(None, None).unwrap().is_none());
    }

    #[test]
    fn test_response_specification_with_groups() {
        let spec = response_specification(Some(vec![plain_group("Thanks")]), Some(true))
            .unwrap()
            .unwrap();
        assert_eq!(spec.message_groups().len(), 1);
        assert_eq!(spec.allow_interrupt(), Some(true));
    }

    #[test]
    fn test_interrupt_without_groups_fails_to_build() {
        // message groups are required by the API shape once the response exists
        let result = response_specification(None, Some(true));
        assert!(matches!(result, Err(Error::Build(_))));
    }

    #[test]
    fn test_variations_are_converted() {
        let mut group = plain_group("Main");
        group.variations = Some(vec![MessageSpec {
            plain_text: Some("Alt".to_string()),
            custom_payload: None,
            ssml: None,
            image_response_card: None,
        }]);
        let converted = group.into_message_group().unwrap();
        assert_eq!(converted.variations().len(), 1);
    }
}
