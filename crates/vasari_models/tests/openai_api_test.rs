use futures_util::StreamExt;
use vasari_core::{GenerateRequest, Message};
use vasari_interface::{ImageDriver, Streaming, VasariDriver};
use vasari_models::OpenAiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = OpenAiClient::new("gpt-4o-mini".to_string())?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Hello")])
        .max_tokens(10_u32)
        .build()?;

    let response = client.generate(&request).await?;

    assert!(
        !response.content.is_empty(),
        "Should receive non-empty response"
    );
    println!("Response: {}", response.content);

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_streaming_reassembles() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = OpenAiClient::new("gpt-4o-mini".to_string())?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Count from one to five in words.")])
        .max_tokens(50_u32)
        .build()?;

    let mut stream = client.generate_stream(&request).await?;
    let mut full = String::new();
    let mut chunks = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        full.push_str(&chunk.content);
        chunks += 1;
    }

    println!("Received {} chunks: {}", chunks, full);
    assert!(chunks > 1, "Streaming should deliver multiple chunks");
    assert!(!full.is_empty());

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_image_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = OpenAiClient::new("gpt-4o-mini".to_string())?;

    let url = client
        .render("A watercolor painting of a beehive in a city garden")
        .await?;

    println!("Image: {}", url);
    assert!(url.starts_with("http"));

    Ok(())
}
