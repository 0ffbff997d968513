pub mod u001_contact_request;
