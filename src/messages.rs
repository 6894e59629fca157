// Pre-registration outcome
pub const PRE_REGISTRATION_SUCCESS: &str = "Pré-cadastro realizado com sucesso!";
pub const PRE_REGISTRATION_FAILURE: &str = "Erro ao realizar pré-cadastro. Tente novamente.";

// Submit button labels
pub const SUBMIT_IDLE: &str = "Cadastrar";
pub const SUBMIT_LOADING: &str = "Cadastrando...";
