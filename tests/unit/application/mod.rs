mod common;
mod test_client;
mod test_incident_services;
mod test_permissions;
mod test_withdrawal_services;
