use super::*;

#[derive(Clone)]
pub(super) struct BrowserTripApi {
    config: Rc<TripPlannerConfig>,
}

impl BrowserTripApi {
    pub(super) fn new(config: TripPlannerConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

#[async_trait(?Send)]
impl TripApi for BrowserTripApi {
    type Payload = FormData;

    async fn delete_trip(&self, trip_id: &TripId) -> Result<DeleteTripResponse, TripApiError> {
        let url = self.config.url_for(&TripRoute::DeleteTrip {
            trip_id: trip_id.clone(),
        });
        let response = Request::post(&url)
            .header("content-type", JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(map_network_error)?;
        decode_json_response(response).await
    }

    async fn generate_trip(&self, payload: FormData) -> Result<GenerateTripResponse, TripApiError> {
        let url = self.config.url_for(&TripRoute::Generate);
        // The browser sets the multipart boundary itself when the body is FormData.
        let request = Request::post(&url)
            .body(payload)
            .map_err(|error| TripApiError::request(format!("failed to build request: {error}")))?;
        let response = request.send().await.map_err(map_network_error)?;
        decode_json_response(response).await
    }
}

pub(super) fn map_network_error(error: gloo_net::Error) -> TripApiError {
    TripApiError::network(error.to_string())
}

pub(super) async fn decode_json_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, TripApiError> {
    let status = response.status();
    let raw = response.text().await.map_err(|error| {
        TripApiError::decode(status, format!("failed to read response: {error}"))
    })?;
    decode_trip_response(status, &raw)
}
