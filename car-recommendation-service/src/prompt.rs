use crate::models::RecommendationRequest;

/// Render the instruction prompt for the model.
///
/// Budget, fuel type and transmission are inserted verbatim, with no numeric
/// parsing or reformatting. A non-empty brand becomes a prefix token directly
/// before the car type ("Toyota sedan"); an empty brand leaves no artifact.
/// This step cannot fail: any combination of strings is a valid input.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    let brand_text = if request.car_brand.is_empty() {
        String::new()
    } else {
        format!("{} ", request.car_brand)
    };

    format!(
        r#"Recommend 10 cars within a ₹{budget} budget for a {brand_text}{car_type} with:
- Fuel Type: {fuel_type}
- Transmission: {transmission}

For each car, provide:
- name (string): Full car name with year, make and model
- price (string): Price formatted with dollar sign and commas
- fuel_type (string): Type of fuel the car uses
- transmission (string): Transmission type
- features (object): With properties:
    - engine (string): Engine specifications
    - fuel_efficiency (string): MPG or efficiency rating
    - safety (string): Safety rating or features
- description (string): A brief description of the car
- image_url (string): Just use "placeholder" as we'll use a placeholder image

Return ONLY valid JSON format like this (no other text or markdown):
{{"recommendations": [
    {{
        "name": "Car Name",
        "price": "₹XX,XXX",
        "fuel_type": "Type",
        "transmission": "Type",
        "features": {{
            "engine": "Details",
            "fuel_efficiency": "XX MPG",
            "safety": "Rating"
        }},
        "description": "Brief description",
        "image_url": "placeholder"
    }}
]}}"#,
        budget = request.budget,
        brand_text = brand_text,
        car_type = request.car_type,
        fuel_type = request.fuel_type,
        transmission = request.transmission,
    )
}
