mod page;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::contact_client::ContactClient;
use crate::contact_form::{ContactForm, SubmitError};
use crate::domain::{ContactFields, Field, SubmissionOutcome};
use page::{Notice, render_contact_page};

pub async fn contact_page() -> HttpResponse {
    html_response(StatusCode::OK, &ContactFields::default(), None)
}

#[tracing::instrument(name = "Send a contact message", skip(form, contact_client))]
pub async fn send_contact_message(
    form: web::Form<ContactFields>,
    contact_client: web::Data<ContactClient>,
) -> HttpResponse {
    let contact_form = ContactForm::new(contact_client.get_ref().clone());
    let fields = form.into_inner();
    for field in Field::ALL {
        contact_form.update_field(field, fields.get(field));
    }

    match contact_form.submit().await {
        Ok(outcome) => {
            let status = match outcome {
                SubmissionOutcome::Succeeded(_) => StatusCode::OK,
                SubmissionOutcome::Pending | SubmissionOutcome::Failed(_) => {
                    StatusCode::BAD_GATEWAY
                }
            };
            html_response(status, &contact_form.fields(), Some(&outcome.into()))
        }
        Err(e) => {
            let status = match e {
                SubmitError::Validation(_) => StatusCode::BAD_REQUEST,
                SubmitError::AlreadyPending => StatusCode::CONFLICT,
            };
            let notice = Notice::Error(e.to_string());
            html_response(status, &contact_form.fields(), Some(&notice))
        }
    }
}

fn html_response(
    status: StatusCode,
    fields: &ContactFields,
    notice: Option<&Notice>,
) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_contact_page(fields, notice))
}
