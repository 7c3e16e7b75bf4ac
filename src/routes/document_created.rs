use actix_web::{
    web,
    HttpResponse,
};

use crate::domain::{
    CreationTrigger,
    DocumentEvent,
};
use crate::notifier::WelcomeNotifier;

/// Entry point for document events pushed by the store.
///
/// - `204` when the trigger does not apply to the event (nothing is sent)
/// - `200` once the welcome email attempt is over, delivered or not
#[tracing::instrument(
    name = "handling document event",
    skip(event, trigger, notifier),
    fields(
        event_id = %event.context.event_id,
        event_type = %event.context.event_type,
        timestamp = ?event.context.timestamp
    )
)]
pub async fn document_created(
    event: web::Json<DocumentEvent>,
    trigger: web::Data<CreationTrigger>,
    notifier: web::Data<WelcomeNotifier>,
) -> HttpResponse {
    let created = match trigger.accept(&event) {
        Ok(created) => created,
        Err(rejection) => {
            tracing::warn!("Ignoring document event: {}", rejection);
            return HttpResponse::NoContent().finish();
        }
    };

    tracing::debug!(bindings = ?created.bindings, "Document matched the trigger");
    notifier
        .on_admin_created(&created.document_id, &created.record)
        .await;
    HttpResponse::Ok().finish()
}
