mod record_validator;
