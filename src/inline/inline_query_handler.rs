use itertools::Itertools;

use crate::bot::{
    report_bot_error, BotError, InlineQuery, InlineQueryResultCachedSticker, InternalError,
    RequestContext, WebhookReply,
};

use super::pagination::QueryPage;

#[tracing::instrument(skip(request_context, q), fields(user_id = q.from.id))]
pub async fn inline_query_handler_wrapper(
    q: InlineQuery,
    request_context: RequestContext,
) -> Result<WebhookReply, InternalError> {
    match inline_query_handler(q, request_context).await {
        Ok(reply) => Ok(reply),
        Err(error) => {
            report_bot_error(&error);
            match error {
                BotError::InternalError(error) => Err(error),
                BotError::UserError(error) => Err(InternalError::Other(anyhow::anyhow!(error))),
            }
        }
    }
}

#[tracing::instrument(skip(request_context, q), err(Debug))]
pub async fn inline_query_handler(
    q: InlineQuery,
    request_context: RequestContext,
) -> Result<WebhookReply, BotError> {
    let database = &request_context.database;
    let page = QueryPage::from_query_offset(&q.offset);
    let group_id = database.get_or_create_group(q.from.id).await?;
    let result = database
        .search_stickers(&q.query, group_id, page.skip())
        .await?;

    let results = result
        .sticker_file_ids
        .into_iter()
        .enumerate()
        .map(|(index, file_id)| InlineQueryResultCachedSticker::new(index.to_string(), file_id))
        .collect_vec();

    Ok(WebhookReply::AnswerInlineQuery {
        inline_query_id: q.id,
        results,
        cache_time: 0,
        is_personal: true,
        next_offset: QueryPage::next_query_offset(result.next_offset),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{test_context, User};

    fn query(user_id: i64, query: &str, offset: &str) -> InlineQuery {
        InlineQuery {
            id: "q".to_string(),
            from: User { id: user_id },
            query: query.to_string(),
            offset: offset.to_string(),
        }
    }

    fn unwrap_results(reply: WebhookReply) -> (Vec<InlineQueryResultCachedSticker>, String) {
        match reply {
            WebhookReply::AnswerInlineQuery {
                results,
                next_offset,
                cache_time,
                is_personal,
                ..
            } => {
                assert_eq!(cache_time, 0);
                assert!(is_personal);
                (results, next_offset)
            }
            other => panic!("expected an inline answer, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn paginates_results() -> anyhow::Result<()> {
        let (ctx, _dir) = test_context().await;
        let group_id = ctx.database.get_or_create_group(7).await?;
        for i in 0..51 {
            ctx.database
                .add_keywords(&format!("sticker-{i}"), "many", group_id)
                .await?;
        }

        let (results, next_offset) =
            unwrap_results(inline_query_handler(query(7, "many", ""), ctx.clone()).await?);
        assert_eq!(results.len(), 50);
        assert_eq!(results[0].id, "0");
        assert_eq!(results[49].id, "49");
        assert_eq!(results[0].sticker_file_id, "sticker-50");
        assert_eq!(next_offset, "50");

        let (results, next_offset) =
            unwrap_results(inline_query_handler(query(7, "many", "50"), ctx.clone()).await?);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "0");
        assert_eq!(next_offset, "");
        Ok(())
    }

    #[tokio::test]
    async fn garbage_offset_starts_over() -> anyhow::Result<()> {
        let (ctx, _dir) = test_context().await;
        let group_id = ctx.database.get_or_create_group(7).await?;
        ctx.database.add_keywords("sticker", "cat", group_id).await?;

        let (results, _) =
            unwrap_results(inline_query_handler(query(7, "cat", "abc"), ctx.clone()).await?);
        assert_eq!(results.len(), 1);
        let (results, _) = unwrap_results(inline_query_handler(query(8, "cat", ""), ctx).await?);
        assert!(results.is_empty());
        Ok(())
    }
}
