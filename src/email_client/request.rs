use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailRequest<'a> {
    pub messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message<'a> {
    pub from: From<'a>,
    pub to: Vec<To<'a>>,
    pub subject: &'a str,
    #[serde(rename = "TextPart")]
    pub text_part: &'a str,
    #[serde(rename = "CustomID")]
    pub custom_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct From<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct To<'a> {
    pub email: &'a str,
}

impl<'a> EmailRequest<'a> {
    pub fn new(
        sender_email: &'a str,
        sender_name: &'a str,
        recipient: &'a str,
        subject: &'a str,
        text_part: &'a str,
        custom_id: &'a str,
    ) -> Self {
        Self {
            messages: vec![Message {
                from: From {
                    email: sender_email,
                    name: sender_name,
                },
                to: vec![To { email: recipient }],
                subject,
                text_part,
                custom_id,
            }],
        }
    }
}
